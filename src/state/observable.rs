// src/state/observable.rs
use std::sync::{Mutex, PoisonError};
use tokio::sync::watch;
use tracing::debug;

/// Current value plus change notifications, backed by a watch channel.
///
/// Once disposed, `publish` silently drops values. Subscribers keep the last
/// value they saw.
#[derive(Debug)]
pub struct Observable<T> {
    sender: watch::Sender<T>,
    disposed: Mutex<bool>,
}

impl<T> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender,
            disposed: Mutex::new(false),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.sender.borrow().clone()
    }

    /// Returns false when the value was dropped because of disposal
    pub fn publish(&self, value: T) -> bool {
        let disposed = self.disposed.lock().unwrap_or_else(PoisonError::into_inner);
        if *disposed {
            debug!("Dropping publish to disposed observable");
            return false;
        }
        self.sender.send_replace(value);
        true
    }

    pub fn dispose(&self) {
        *self.disposed.lock().unwrap_or_else(PoisonError::into_inner) = true;
    }

    pub fn is_disposed(&self) -> bool {
        *self.disposed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
