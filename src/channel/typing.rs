//! Per-channel typing state with timed eviction.
//!
//! The gateway reports typing starts but never typing stops; a user counts
//! as typing for [`TYPING_TTL`] after their latest start. [`TypingIndicator`]
//! keeps that ephemeral set for one channel, safe under concurrent updates
//! from many producers.
//!
//! Internally each insertion gets a monotonically increasing token, and a
//! single reaper thread consumes a min-heap of `(deadline, token, user)`
//! entries. Refreshing a user issues a new token, so a stale heap entry
//! whose token no longer matches the map is ignored when its deadline
//! fires. One fair read-write lock guards the map and the heap together:
//! mutations are serialized, reads run in parallel.

use crate::id::{marker::UserMarker, Id};
use parking_lot::{Mutex, RwLock};
use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap},
    sync::{mpsc, Arc},
    thread::JoinHandle,
    time::{Duration, Instant},
};

/// How long a user stays in the typing set after their last typing start.
pub const TYPING_TTL: Duration = Duration::from_secs(15);

/// Live entry for a typing user.
#[derive(Clone, Copy)]
struct Presence {
    token: u64,
    deadline: Instant,
}

/// Heap entry owned by the reaper. Ordered by deadline (then token) so the
/// wrapped `Reverse` yields the earliest deadline first.
#[derive(Eq, PartialEq)]
struct Expiry {
    deadline: Instant,
    token: u64,
    user: Id<UserMarker>,
}

impl Ord for Expiry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then(self.token.cmp(&other.token))
            .then(self.user.cmp(&other.user))
    }
}

impl PartialOrd for Expiry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct TypingState {
    users: HashMap<Id<UserMarker>, Presence>,
    queue: BinaryHeap<Reverse<Expiry>>,
    next_token: u64,
    closed: bool,
}

/// The set of users currently typing in one channel.
///
/// All operations are safe to call from any thread. `add` and `remove`
/// serialize against each other and against timer eviction; `contains` and
/// `snapshot` run in parallel with other reads.
pub struct TypingIndicator {
    state: Arc<RwLock<TypingState>>,
    wake: mpsc::Sender<()>,
    reaper: Mutex<Option<JoinHandle<()>>>,
    ttl: Duration,
}

impl TypingIndicator {
    /// Create an indicator with the standard [`TYPING_TTL`].
    pub fn new() -> Self {
        Self::with_ttl(TYPING_TTL)
    }

    fn with_ttl(ttl: Duration) -> Self {
        let state = Arc::new(RwLock::new(TypingState {
            users: HashMap::new(),
            queue: BinaryHeap::new(),
            next_token: 0,
            closed: false,
        }));
        let (wake, wake_rx) = mpsc::channel();

        let reaper_state = Arc::clone(&state);
        let reaper = std::thread::Builder::new()
            .name("typing-reaper".to_owned())
            .spawn(move || reap(&reaper_state, &wake_rx))
            .expect("spawning the typing reaper thread");

        Self {
            state,
            wake,
            reaper: Mutex::new(Some(reaper)),
            ttl,
        }
    }

    /// Insert a user, or refresh their deadline if already present.
    ///
    /// No-op after [`close`](Self::close).
    pub fn add(&self, user_id: Id<UserMarker>) {
        {
            let mut state = self.state.write();
            if state.closed {
                return;
            }

            let token = state.next_token;
            state.next_token += 1;

            let deadline = Instant::now() + self.ttl;
            state.users.insert(user_id, Presence { token, deadline });
            state.queue.push(Reverse(Expiry {
                deadline,
                token,
                user: user_id,
            }));
        }

        // Wake the reaper so it re-arms for the (possibly earlier) deadline.
        let _ = self.wake.send(());
    }

    /// Remove a user. Idempotent; their pending timer becomes stale and is
    /// discarded when it fires.
    pub fn remove(&self, user_id: Id<UserMarker>) {
        let mut state = self.state.write();
        if state.closed {
            return;
        }

        state.users.remove(&user_id);
    }

    /// Whether the user is currently typing.
    pub fn contains(&self, user_id: Id<UserMarker>) -> bool {
        let now = Instant::now();
        let state = self.state.read();

        state
            .users
            .get(&user_id)
            .is_some_and(|presence| presence.deadline > now)
    }

    /// Consistent point-in-time copy of the typing set.
    pub fn snapshot(&self) -> Vec<Id<UserMarker>> {
        let now = Instant::now();
        let state = self.state.read();

        state
            .users
            .iter()
            .filter(|(_, presence)| presence.deadline > now)
            .map(|(user, _)| *user)
            .collect()
    }

    /// Number of users currently typing.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        let state = self.state.read();

        state
            .users
            .values()
            .filter(|presence| presence.deadline > now)
            .count()
    }

    /// Whether the typing set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.state.read().closed
    }

    /// Cancel all outstanding timers, reject further mutations, and stop
    /// the reaper thread. Idempotent.
    pub fn close(&self) {
        {
            let mut state = self.state.write();
            state.closed = true;
            state.users.clear();
            state.queue.clear();
        }

        let _ = self.wake.send(());

        if let Some(handle) = self.reaper.lock().take() {
            let _ = handle.join();
        }
    }
}

impl Default for TypingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TypingIndicator {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for TypingIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypingIndicator")
            .field("len", &self.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Reaper loop: sleep until the earliest deadline (or a wakeup), then evict
/// every due entry whose token is still current.
fn reap(state: &RwLock<TypingState>, wake: &mpsc::Receiver<()>) {
    loop {
        let wait = {
            let state = state.read();
            if state.closed {
                return;
            }

            state
                .queue
                .peek()
                .map(|Reverse(entry)| entry.deadline.saturating_duration_since(Instant::now()))
        };

        match wait {
            // Nothing scheduled: block until a mutation wakes us.
            None => {
                if wake.recv().is_err() {
                    return;
                }
            }
            Some(wait) if !wait.is_zero() => {
                match wake.recv_timeout(wait) {
                    // Re-evaluate the earliest deadline.
                    Ok(()) => continue,
                    Err(mpsc::RecvTimeoutError::Timeout) => {}
                    Err(mpsc::RecvTimeoutError::Disconnected) => return,
                }
            }
            // Earliest deadline already due.
            Some(_) => {}
        }

        let mut state = state.write();
        if state.closed {
            return;
        }

        let now = Instant::now();
        while let Some(Reverse(entry)) = state.queue.peek() {
            if entry.deadline > now {
                break;
            }

            let Some(Reverse(entry)) = state.queue.pop() else {
                break;
            };

            // Stale-token check: the user may have been refreshed (new
            // token) or removed since this entry was scheduled.
            if state
                .users
                .get(&entry.user)
                .is_some_and(|presence| presence.token == entry.token)
            {
                state.users.remove(&entry.user);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TypingIndicator, TYPING_TTL};
    use crate::id::{marker::UserMarker, Id};
    use static_assertions::assert_impl_all;
    use std::{sync::Arc, thread, time::Duration};

    assert_impl_all!(TypingIndicator: Send, Sync);

    const A: Id<UserMarker> = Id::new(1);
    const B: Id<UserMarker> = Id::new(2);

    #[test]
    fn standard_ttl() {
        assert_eq!(TYPING_TTL, Duration::from_secs(15));
    }

    #[test]
    fn add_then_contains_then_expiry() {
        let typing = TypingIndicator::with_ttl(Duration::from_millis(50));

        typing.add(A);
        assert!(typing.contains(A));

        thread::sleep(Duration::from_millis(80));
        assert!(!typing.contains(A));
        assert!(typing.snapshot().is_empty());
    }

    #[test]
    fn refresh_extends_presence() {
        let typing = TypingIndicator::with_ttl(Duration::from_millis(100));

        typing.add(A);
        thread::sleep(Duration::from_millis(60));
        // Refresh at t=60ms; the original deadline (t=100ms) is now stale.
        typing.add(A);
        thread::sleep(Duration::from_millis(60));
        assert!(typing.contains(A), "refresh should have extended presence");

        thread::sleep(Duration::from_millis(80));
        assert!(!typing.contains(A));
    }

    #[test]
    fn remove_is_idempotent_and_wins_over_timer() {
        let typing = TypingIndicator::with_ttl(Duration::from_millis(100));

        typing.add(A);
        typing.remove(A);
        typing.remove(A);
        assert!(!typing.contains(A));

        // A removed user's pending timer must not affect a later insert.
        typing.add(A);
        assert!(typing.contains(A));
    }

    #[test]
    fn snapshot_is_a_copy() {
        let typing = TypingIndicator::new();

        typing.add(A);
        typing.add(B);

        let mut snapshot = typing.snapshot();
        snapshot.sort_unstable();
        assert_eq!(snapshot, [A, B]);

        typing.remove(A);
        assert_eq!(snapshot.len(), 2, "snapshot must not track later changes");
    }

    #[test]
    fn close_clears_and_blocks_mutations() {
        let typing = TypingIndicator::new();

        typing.add(A);
        typing.close();

        assert!(typing.is_closed());
        assert!(!typing.contains(A));

        typing.add(B);
        assert!(!typing.contains(B));

        // Idempotent.
        typing.close();
    }

    #[test]
    fn concurrent_producers() {
        let typing = Arc::new(TypingIndicator::with_ttl(Duration::from_secs(5)));
        let mut handles = Vec::new();

        for worker in 0..4u64 {
            let typing = Arc::clone(&typing);
            handles.push(thread::spawn(move || {
                for i in 0..100u64 {
                    let user = Id::new(worker * 1_000 + i + 1);
                    typing.add(user);
                    if i % 2 == 0 {
                        typing.remove(user);
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(typing.len(), 4 * 50);
    }
}
