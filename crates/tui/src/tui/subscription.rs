use tokio::task::JoinHandle;

/// In-flight service calls owned by one panel. Dropping the set aborts them,
/// so a replaced panel never hears back from its own requests.
#[derive(Debug, Default)]
pub(crate) struct Subscriptions {
    handles: Vec<JoinHandle<()>>,
}

impl Subscriptions {
    pub(crate) fn track(&mut self, handle: JoinHandle<()>) {
        self.handles.retain(|handle| !handle.is_finished());
        self.handles.push(handle);
    }

    pub(crate) fn active(&self) -> usize {
        self.handles
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    pub(crate) fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime")
    }

    #[test]
    fn dropping_aborts_pending_calls() {
        let rt = runtime();
        let (tx, rx) = oneshot::channel::<()>();
        let mut subscriptions = Subscriptions::default();
        subscriptions.track(rt.spawn(async move {
            let _keep = tx;
            std::future::pending::<()>().await;
        }));
        assert_eq!(subscriptions.active(), 1);

        drop(subscriptions);

        assert!(rt.block_on(rx).is_err());
    }

    #[test]
    fn finished_calls_are_pruned() {
        let rt = runtime();
        let mut subscriptions = Subscriptions::default();
        let handle = rt.spawn(async {});
        rt.block_on(async {
            while !handle.is_finished() {
                tokio::task::yield_now().await;
            }
        });
        subscriptions.track(handle);
        subscriptions.track(rt.spawn(std::future::pending::<()>()));

        assert_eq!(subscriptions.handles.len(), 1);
        assert_eq!(subscriptions.active(), 1);
    }
}
