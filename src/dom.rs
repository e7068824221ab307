//! Applying `DomOp`s to a document

use crate::error::Result;
use crate::render::DomOp;

/// Something that can carry out render operations
///
/// Ops are applied in order; the first failure stops the batch and leaves
/// earlier ops in place.
pub trait DomSink {
    fn apply(&self, ops: &[DomOp]) -> Result<()>;
}

impl<T: DomSink + ?Sized> DomSink for std::rc::Rc<T> {
    fn apply(&self, ops: &[DomOp]) -> Result<()> {
        (**self).apply(ops)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::DocumentSink;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement};

    use super::DomSink;
    use crate::error::{DashboardError, Result};
    use crate::render::{DomOp, Node};

    /// Writes into the live page
    #[derive(Clone)]
    pub struct DocumentSink {
        document: Document,
    }

    impl DocumentSink {
        pub fn from_window() -> Result<Self> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| DashboardError::Dom("no document".into()))?;
            Ok(Self { document })
        }

        fn element(&self, id: &str) -> Result<Element> {
            self.document
                .get_element_by_id(id)
                .ok_or_else(|| DashboardError::Dom(format!("element #{id} not found")))
        }

        fn build(&self, node: &Node) -> Result<Element> {
            let el = self.document.create_element(node.tag)?;
            if let Some(class) = node.class {
                el.set_class_name(class);
            }
            if let Some(text) = &node.text {
                el.set_text_content(Some(text));
            }
            for child in &node.children {
                el.append_child(&self.build(child)?)?;
            }
            Ok(el)
        }
    }

    impl DomSink for DocumentSink {
        fn apply(&self, ops: &[DomOp]) -> Result<()> {
            for op in ops {
                let el = self.element(op.target())?;
                match op {
                    DomOp::SetText { text, .. } => el.set_text_content(Some(text)),
                    DomOp::SetStyle {
                        id,
                        property,
                        value,
                    } => {
                        let html = el.dyn_ref::<HtmlElement>().ok_or_else(|| {
                            DashboardError::Dom(format!("#{id} is not an HTML element"))
                        })?;
                        html.style().set_property(property, value)?;
                    }
                    DomOp::SetAttribute { name, value, .. } => el.set_attribute(name, value)?,
                    DomOp::ReplaceChildren { children, .. } => {
                        el.set_text_content(None);
                        for child in children {
                            el.append_child(&self.build(child)?)?;
                        }
                    }
                }
            }
            Ok(())
        }
    }
}
