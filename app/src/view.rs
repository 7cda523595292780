//! The election view-state: best-effort snapshot assembly.

use blockvote_contract::{ChainError, ElectionContract};
use blockvote_types::{Address, ElectionPhase};

use crate::snapshot::Snapshot;

/// Holds the current snapshot and knows how to rebuild it.
#[derive(Default)]
pub struct ElectionView {
    snapshot: Snapshot,
}

impl ElectionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Rebuild the snapshot from the contract.
    ///
    /// The three unconditional reads fan out concurrently; the voter flag
    /// is read only for a connected account and the winner only once the
    /// election has ended. If any read fails the whole refresh aborts and
    /// the previous snapshot stays in place (no partial overwrite). The
    /// caller logs the error; there is no retry.
    pub async fn refresh(
        &mut self,
        contract: &ElectionContract,
        account: Option<&Address>,
    ) -> Result<(), ChainError> {
        let (started, ended, candidates) = tokio::try_join!(
            contract.election_started(),
            contract.election_ended(),
            contract.get_all_candidates(),
        )?;

        let has_voted = match account {
            Some(account) => contract.has_voted(account).await?,
            None => false,
        };

        let winner = if ended {
            Some(contract.get_winner().await?)
        } else {
            None
        };

        self.snapshot = Snapshot {
            phase: ElectionPhase::from_flags(started, ended),
            candidates,
            has_voted,
            winner,
        };
        Ok(())
    }

    /// Drop everything back to the initial empty snapshot (disconnect or
    /// chain change).
    pub fn reset(&mut self) {
        self.snapshot = Snapshot::default();
    }
}
