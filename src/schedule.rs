//! Timer-driven poll loops
//!
//! A loop is a tick stream plus a cycle: one cycle runs straight away, then
//! one per tick. Each cycle is spawned rather than awaited, so a slow
//! request never delays the next tick (overlap is handled by the pollers'
//! sequencers).

use std::future::Future;

use futures::task::{LocalSpawn, LocalSpawnExt};
use futures::{Stream, StreamExt};

use crate::console::console_debug;
use crate::error::Result;

/// One fetch-and-render pass
pub trait PollCycle: Clone + 'static {
    /// Name used in log lines
    fn name(&self) -> &'static str;

    fn poll_once(&self) -> impl Future<Output = ()>;
}

fn spawn_cycle<C: PollCycle, Sp: LocalSpawn + ?Sized>(cycle: &C, spawner: &Sp) -> Result<()> {
    let cycle = cycle.clone();
    spawner.spawn_local(async move { cycle.poll_once().await })?;
    Ok(())
}

/// Run `cycle` now and again on every tick until the stream ends
pub async fn run_polling<C, T, Sp>(cycle: C, mut ticks: T, spawner: Sp) -> Result<()>
where
    C: PollCycle,
    T: Stream<Item = ()> + Unpin,
    Sp: LocalSpawn,
{
    spawn_cycle(&cycle, &spawner)?;
    let mut count: u64 = 1;
    while ticks.next().await.is_some() {
        count += 1;
        console_debug!("{} poll #{count}", cycle.name());
        spawn_cycle(&cycle, &spawner)?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub use web::{BrowserSpawner, IntervalTicks};

#[cfg(target_arch = "wasm32")]
mod web {
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use futures::channel::mpsc;
    use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};
    use futures::{Stream, StreamExt};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use crate::error::{DashboardError, Result};

    /// Spawns onto the browser's microtask queue
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserSpawner;

    impl LocalSpawn for BrowserSpawner {
        fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> std::result::Result<(), SpawnError> {
            wasm_bindgen_futures::spawn_local(future);
            Ok(())
        }
    }

    /// `setInterval` as a stream; the interval is cleared on drop
    pub struct IntervalTicks {
        rx: mpsc::UnboundedReceiver<()>,
        handle: i32,
        _callback: Closure<dyn FnMut()>,
    }

    impl IntervalTicks {
        pub fn start(period_ms: u32) -> Result<Self> {
            let window = web_sys::window().ok_or_else(|| DashboardError::Dom("no window".into()))?;
            let (tx, rx) = mpsc::unbounded();
            let callback = Closure::<dyn FnMut()>::new(move || {
                let _ = tx.unbounded_send(());
            });
            let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                i32::try_from(period_ms).unwrap_or(i32::MAX),
            )?;
            Ok(Self {
                rx,
                handle,
                _callback: callback,
            })
        }
    }

    impl Stream for IntervalTicks {
        type Item = ();

        fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<()>> {
            self.get_mut().rx.poll_next_unpin(cx)
        }
    }

    impl Drop for IntervalTicks {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(self.handle);
            }
        }
    }
}
