pub mod generator;

pub use generator::SampleGenerator;

use aqmon_core::{classify, Reading, Session, Severity, Table};
use rand::Rng;
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};

/// What renderers need after one tick: the newest reading, its severity and
/// the rebuilt table.
#[derive(Debug, Clone)]
pub struct TickUpdate {
    pub reading:  Reading,
    pub severity: Severity,
    pub table:    Table,
}

/// One full tick: generate → append → build_table.
///
/// Runs to completion before returning, so two ticks can never interleave
/// their mutation of `session`.
pub fn tick<R: Rng>(session: &mut Session, generator: &mut SampleGenerator<R>) -> TickUpdate {
    let reading = generator.generate();
    tracing::debug!(value = reading.value(), timestamp = reading.timestamp(), "tick");

    session.tick(reading.clone());

    TickUpdate {
        severity: classify(reading.value()),
        reading,
        table: session.table().clone(),
    }
}

/// Spawn a background Tokio task that owns its own [`Session`] and ticks it
/// on the period currently held by `interval`.
///
/// The first tick runs immediately.  An interval change re-arms the pending
/// tick relative to the previous one, so it applies from the next tick on.
/// The task stops automatically when the receiver is dropped.
pub fn spawn_sampler(
    capacity: NonZeroUsize,
    interval: watch::Receiver<Duration>,
) -> mpsc::Receiver<TickUpdate> {
    let (tx, rx) = mpsc::channel(4);

    tokio::spawn(run_ticks(
        Session::new(capacity),
        SampleGenerator::new(),
        interval,
        tx,
    ));

    rx
}

async fn run_ticks<R: Rng>(
    mut session: Session,
    mut generator: SampleGenerator<R>,
    mut interval: watch::Receiver<Duration>,
    tx: mpsc::Sender<TickUpdate>,
) {
    let mut interval_live = true;

    loop {
        let last_tick = Instant::now();
        let update = tick(&mut session, &mut generator);

        if tx.send(update).await.is_err() {
            break; // all receivers dropped
        }

        loop {
            let deadline = last_tick + *interval.borrow_and_update();

            if !interval_live {
                time::sleep_until(deadline).await;
                break;
            }

            tokio::select! {
                _ = time::sleep_until(deadline) => break,
                changed = interval.changed() => {
                    if changed.is_err() {
                        // Interval sender gone: keep the last period forever.
                        interval_live = false;
                    } else {
                        tracing::info!("sampling interval changed to {:?}", *interval.borrow());
                    }
                }
            }
        }
    }

    tracing::debug!(ticks = session.ticks(), "sampler stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn thirty_ticks_into_capacity_twenty_five() {
        let mut session = Session::new(cap(25));
        let mut generator = SampleGenerator::seeded(2024);

        let generated: Vec<Reading> = (0..30)
            .map(|_| tick(&mut session, &mut generator).reading)
            .collect();

        let snapshot = session.buffer().snapshot();
        assert_eq!(snapshot.len(), 25);
        assert_eq!(snapshot[0], generated[5]);
        assert_eq!(snapshot.as_slice(), &generated[5..]);
        assert_eq!(session.table().len(), 25);
    }

    #[test]
    fn tick_update_matches_session() {
        let mut session = Session::new(cap(3));
        let mut generator = SampleGenerator::seeded(9);

        let update = tick(&mut session, &mut generator);
        assert_eq!(session.latest(), Some(&update.reading));
        assert_eq!(update.severity, classify(update.reading.value()));
        assert_eq!(&update.table, session.table());
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_immediate_then_periodic() {
        let (_tx, rx) = watch::channel(Duration::from_millis(1_500));
        let mut updates = spawn_sampler(cap(25), rx);
        let start = Instant::now();

        let first = updates.recv().await.unwrap();
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(first.table.len(), 1);

        let second = updates.recv().await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1_500) && elapsed < Duration::from_millis(1_600));
        assert_eq!(second.table.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_change_applies_from_next_tick() {
        let (tx, rx) = watch::channel(Duration::from_millis(1_500));
        let mut updates = spawn_sampler(cap(25), rx);
        let start = Instant::now();

        updates.recv().await.unwrap();
        updates.recv().await.unwrap();
        tx.send(Duration::from_secs(5)).unwrap();

        updates.recv().await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(6_500) && elapsed < Duration::from_millis(6_600));
    }

    #[tokio::test(start_paused = true)]
    async fn table_never_outgrows_capacity() {
        let (_tx, rx) = watch::channel(Duration::from_secs(1));
        let mut updates = spawn_sampler(cap(4), rx);

        for expected in [1, 2, 3, 4, 4, 4] {
            assert_eq!(updates.recv().await.unwrap().table.len(), expected);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_ticking_after_interval_sender_drops() {
        let (tx, rx) = watch::channel(Duration::from_secs(2));
        let mut updates = spawn_sampler(cap(25), rx);
        updates.recv().await.unwrap();
        drop(tx);

        let start = Instant::now();
        updates.recv().await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2) && elapsed < Duration::from_millis(2_100));
    }
}
