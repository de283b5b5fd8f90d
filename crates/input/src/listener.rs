//! Bounded-time choice acquisition.
//!
//! Each call spawns one listener thread that reads the key source and
//! publishes at most one result into a oneshot channel. The caller races that
//! channel against the deadline on a small current-thread tokio runtime.
//!
//! On timeout the wait is abandoned, not the read: the listener sees its
//! cancellation flag at the next poll and exits, and any result it still
//! produces is dropped with the closed channel. The key source lives behind a
//! mutex, so a late listener and the next round's listener never read at the
//! same time.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::oneshot;
use tokio::time::{Instant, MissedTickBehavior};

use crate::map::KeySignal;
use crate::source::KeySource;
use crate::types::Side;

/// How often the listener wakes up to check for cancellation.
pub const LISTENER_POLL_MS: u64 = 25;

/// How often the countdown callback fires while waiting.
pub const COUNTDOWN_TICK_MS: u64 = 100;

/// Why no side was acquired.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("time's up")]
    Timeout,
    #[error("player quit")]
    Quit,
    #[error("key source failed: {0}")]
    Device(#[from] io::Error),
    #[error("key listener stopped without a result")]
    ListenerGone,
}

/// Anything the engine can ask for a side within a deadline.
pub trait ChoiceSource {
    /// Wait for a side for at most `deadline`.
    ///
    /// `on_tick` receives the time remaining at a fixed countdown interval.
    fn acquire_choice_with_countdown(
        &mut self,
        deadline: Duration,
        on_tick: &mut dyn FnMut(Duration),
    ) -> Result<Side, AcquireError>;

    fn acquire_choice(&mut self, deadline: Duration) -> Result<Side, AcquireError> {
        self.acquire_choice_with_countdown(deadline, &mut |_| {})
    }

    /// Acquire the input device for a session.
    fn open(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Release the input device at session end.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Races a per-round key listener thread against a deadline.
pub struct ChoiceListener<K: KeySource> {
    rt: Runtime,
    source: Arc<Mutex<K>>,
    poll_interval: Duration,
    tick_interval: Duration,
}

impl<K: KeySource> ChoiceListener<K> {
    pub fn new(source: K) -> io::Result<Self> {
        let rt = Builder::new_current_thread().enable_time().build()?;
        Ok(Self {
            rt,
            source: Arc::new(Mutex::new(source)),
            poll_interval: Duration::from_millis(LISTENER_POLL_MS),
            tick_interval: Duration::from_millis(COUNTDOWN_TICK_MS),
        })
    }

    pub fn with_tick_interval(mut self, tick: Duration) -> Self {
        self.tick_interval = tick.max(Duration::from_millis(1));
        self
    }

    /// Run `f` against the key source (waits for any straggling listener).
    pub fn with_source<T>(&self, f: impl FnOnce(&mut K) -> T) -> T {
        f(&mut lock(&self.source))
    }

    fn spawn_listener(
        &self,
        cancel: Arc<AtomicBool>,
        tx: oneshot::Sender<Result<Side, AcquireError>>,
    ) -> io::Result<()> {
        let source = Arc::clone(&self.source);
        let poll = self.poll_interval;
        thread::Builder::new()
            .name("stairs-key-listener".to_string())
            .spawn(move || {
                if let Some(result) = listen(&source, &cancel, poll) {
                    if tx.send(result).is_err() {
                        log::debug!("key arrived after the round ended; dropped");
                    }
                }
            })?;
        Ok(())
    }
}

impl<K: KeySource> ChoiceSource for ChoiceListener<K> {
    fn acquire_choice_with_countdown(
        &mut self,
        deadline: Duration,
        on_tick: &mut dyn FnMut(Duration),
    ) -> Result<Side, AcquireError> {
        let (tx, mut rx) = oneshot::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        self.spawn_listener(Arc::clone(&cancel), tx)?;

        let tick = self.tick_interval;
        let result = self.rt.block_on(async move {
            let expires = Instant::now() + deadline;
            let timeout = tokio::time::sleep_until(expires);
            tokio::pin!(timeout);

            let mut ticker = tokio::time::interval(tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    published = &mut rx => {
                        return published.unwrap_or(Err(AcquireError::ListenerGone));
                    }
                    _ = &mut timeout => return Err(AcquireError::Timeout),
                    _ = ticker.tick() => {
                        on_tick(expires.saturating_duration_since(Instant::now()));
                    }
                }
            }
        });

        cancel.store(true, Ordering::Release);
        result
    }

    fn open(&mut self) -> io::Result<()> {
        lock(&self.source).open()
    }

    fn close(&mut self) -> io::Result<()> {
        lock(&self.source).close()
    }
}

impl<K: KeySource> Drop for ChoiceListener<K> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

fn lock<K>(source: &Mutex<K>) -> std::sync::MutexGuard<'_, K> {
    // A panicking listener cannot leave the source half-updated.
    source.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn listen<K: KeySource>(
    source: &Mutex<K>,
    cancel: &AtomicBool,
    poll: Duration,
) -> Option<Result<Side, AcquireError>> {
    if let Err(err) = lock(source).discard_pending() {
        return Some(Err(AcquireError::Device(err)));
    }

    loop {
        if cancel.load(Ordering::Acquire) {
            return None;
        }
        let key = lock(source).next_key(poll);
        match key {
            Ok(Some(KeySignal::Jump(side))) => return Some(Ok(side)),
            Ok(Some(KeySignal::Quit)) => return Some(Err(AcquireError::Quit)),
            Ok(Some(KeySignal::Unrecognized)) | Ok(None) => continue,
            Err(err) => return Some(Err(AcquireError::Device(err))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedKeySource;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn returns_first_side_within_deadline() {
        let src = ScriptedKeySource::new().key(ms(20), KeySignal::Jump(Side::Right));
        let mut listener = ChoiceListener::new(src).unwrap();
        assert_eq!(listener.acquire_choice(ms(1000)).unwrap(), Side::Right);
    }

    #[test]
    fn ignores_unrecognized_keys() {
        let src = ScriptedKeySource::new()
            .key(ms(5), KeySignal::Unrecognized)
            .key(ms(5), KeySignal::Unrecognized)
            .key(ms(5), KeySignal::Jump(Side::Left));
        let mut listener = ChoiceListener::new(src).unwrap();
        assert_eq!(listener.acquire_choice(ms(1000)).unwrap(), Side::Left);
    }

    #[test]
    fn times_out_when_no_key_arrives() {
        let mut listener = ChoiceListener::new(ScriptedKeySource::new()).unwrap();
        let started = std::time::Instant::now();
        let err = listener.acquire_choice(ms(60)).unwrap_err();
        assert!(matches!(err, AcquireError::Timeout));
        assert!(started.elapsed() >= ms(60));
        assert!(started.elapsed() < ms(1000));
    }

    #[test]
    fn key_after_deadline_does_not_count() {
        let src = ScriptedKeySource::new().key(ms(300), KeySignal::Jump(Side::Left));
        let mut listener = ChoiceListener::new(src).unwrap();
        assert!(matches!(
            listener.acquire_choice(ms(50)),
            Err(AcquireError::Timeout)
        ));
    }

    #[test]
    fn abandoned_listener_stops_reading() {
        let mut listener = ChoiceListener::new(ScriptedKeySource::new()).unwrap();
        assert!(listener.acquire_choice(ms(40)).is_err());

        // Give the abandoned listener time to observe cancellation.
        thread::sleep(ms(LISTENER_POLL_MS * 4));
        let reads = listener.with_source(|s| s.reads());
        thread::sleep(ms(LISTENER_POLL_MS * 4));
        assert_eq!(listener.with_source(|s| s.reads()), reads);
    }

    #[test]
    fn quit_key_is_reported() {
        let src = ScriptedKeySource::new().key(ms(5), KeySignal::Quit);
        let mut listener = ChoiceListener::new(src).unwrap();
        assert!(matches!(
            listener.acquire_choice(ms(1000)),
            Err(AcquireError::Quit)
        ));
    }

    #[test]
    fn device_failure_is_reported() {
        let src = ScriptedKeySource::new().fail(ms(5), io::ErrorKind::UnexpectedEof);
        let mut listener = ChoiceListener::new(src).unwrap();
        match listener.acquire_choice(ms(1000)) {
            Err(AcquireError::Device(err)) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected device error, got {other:?}"),
        }
    }

    #[test]
    fn countdown_ticks_while_waiting() {
        let mut listener = ChoiceListener::new(ScriptedKeySource::new())
            .unwrap()
            .with_tick_interval(ms(10));
        let mut remaining = Vec::new();
        let result = listener.acquire_choice_with_countdown(ms(80), &mut |left| remaining.push(left));
        assert!(matches!(result, Err(AcquireError::Timeout)));
        assert!(remaining.len() >= 3, "ticks: {remaining:?}");
        assert!(remaining.windows(2).all(|w| w[1] <= w[0]));
        assert!(remaining.iter().all(|r| *r <= ms(80)));
    }

    #[test]
    fn consecutive_rounds_each_get_their_own_key() {
        let src = ScriptedKeySource::new()
            .key(ms(5), KeySignal::Jump(Side::Left))
            .key(ms(5), KeySignal::Jump(Side::Right));
        let mut listener = ChoiceListener::new(src).unwrap();
        assert_eq!(listener.acquire_choice(ms(1000)).unwrap(), Side::Left);
        assert_eq!(listener.acquire_choice(ms(1000)).unwrap(), Side::Right);
    }
}
