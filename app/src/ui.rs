//! Stateless presentation view-models.
//!
//! Pure derivations from session and snapshot state: no I/O, no mutation.
//! The terminal front-end maps these onto widgets; tests assert on them
//! directly.

use blockvote_types::{Address, ElectionPhase};
use blockvote_utils::short_address;

use crate::notify::Notice;
use crate::snapshot::Snapshot;

/// Visual tone of the status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: Tone,
}

/// The wallet affordance in the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletButton {
    /// Offer to connect; disabled while a connect attempt is in flight.
    Connect { enabled: bool, label: &'static str },
    /// Connected: show the abbreviated account and offer to disconnect.
    Connected { short_account: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteControl {
    pub enabled: bool,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateCard {
    pub id: u64,
    pub name: String,
    pub vote_count: u64,
    /// Present only while voting is open.
    pub vote_control: Option<VoteControl>,
    pub is_winner: bool,
}

/// Admin controls, gated by phase. `None` for non-admins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminPanel {
    pub show_add_candidate: bool,
    pub show_start: bool,
    pub show_end: bool,
    /// All controls grey out while a transaction is in flight.
    pub controls_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinnerBanner {
    pub name: String,
    pub vote_count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

/// Everything the front-end needs to draw one frame.
pub struct Page {
    pub connected: bool,
    pub is_admin: bool,
    pub wallet: WalletButton,
    pub status: StatusBadge,
    pub admin_panel: Option<AdminPanel>,
    pub admin_hint: Option<String>,
    pub winner: Option<WinnerBanner>,
    pub heading: &'static str,
    pub candidates: Vec<CandidateCard>,
    pub empty_state: Option<EmptyState>,
    pub show_onboarding: bool,
    pub notices: Vec<Notice>,
}

pub fn wallet_button(account: Option<&Address>, connecting: bool) -> WalletButton {
    match account {
        Some(account) => WalletButton::Connected {
            short_account: short_address(account),
        },
        None if connecting => WalletButton::Connect {
            enabled: false,
            label: "Connecting…",
        },
        None => WalletButton::Connect {
            enabled: true,
            label: "Connect Wallet",
        },
    }
}

pub fn status_badge(phase: ElectionPhase) -> StatusBadge {
    match phase {
        ElectionPhase::NotStarted => StatusBadge {
            label: "Not Started",
            tone: Tone::Neutral,
        },
        ElectionPhase::Active => StatusBadge {
            label: "Voting Active",
            tone: Tone::Positive,
        },
        ElectionPhase::Ended => StatusBadge {
            label: "Election Ended",
            tone: Tone::Negative,
        },
    }
}

pub fn results_heading(phase: ElectionPhase) -> &'static str {
    match phase {
        ElectionPhase::NotStarted => "Candidates",
        ElectionPhase::Active => "Live Results",
        ElectionPhase::Ended => "Final Results",
    }
}

pub fn candidate_cards(snapshot: &Snapshot, busy: bool) -> Vec<CandidateCard> {
    snapshot
        .candidates
        .iter()
        .map(|candidate| {
            let vote_control = snapshot.phase.voting_open().then(|| {
                if snapshot.has_voted {
                    VoteControl {
                        enabled: false,
                        label: "Already Voted",
                    }
                } else {
                    VoteControl {
                        enabled: !busy,
                        label: "Cast Vote",
                    }
                }
            });

            let is_winner = snapshot.phase.has_ended()
                && snapshot
                    .winner
                    .as_ref()
                    .is_some_and(|winner| candidate.matches_winner(winner));

            CandidateCard {
                id: candidate.id,
                name: candidate.name.clone(),
                vote_count: candidate.vote_count,
                vote_control,
                is_winner,
            }
        })
        .collect()
}

pub fn admin_panel(phase: ElectionPhase, is_admin: bool, busy: bool) -> Option<AdminPanel> {
    if !is_admin {
        return None;
    }
    Some(AdminPanel {
        show_add_candidate: phase == ElectionPhase::NotStarted,
        show_start: phase == ElectionPhase::NotStarted,
        show_end: phase == ElectionPhase::Active,
        controls_enabled: !busy,
    })
}

/// Informational line shown to connected non-admins.
pub fn admin_hint(connected: bool, is_admin: bool, admin_address: &Address) -> Option<String> {
    (connected && !is_admin).then(|| {
        format!(
            "Only the admin wallet ({}) can manage the election",
            short_address(admin_address)
        )
    })
}

pub fn winner_banner(snapshot: &Snapshot) -> Option<WinnerBanner> {
    if !snapshot.phase.has_ended() {
        return None;
    }
    snapshot.winner.as_ref().map(|winner| WinnerBanner {
        name: winner.name.clone(),
        vote_count: winner.vote_count,
    })
}

pub fn empty_state(snapshot: &Snapshot, is_admin: bool) -> Option<EmptyState> {
    snapshot.candidates.is_empty().then(|| EmptyState {
        title: "No candidates yet",
        hint: if is_admin {
            "Use the admin panel to add candidates"
        } else {
            "The admin needs to add candidates to start the election"
        },
    })
}

/// The onboarding walkthrough: only for a non-admin looking at a fresh,
/// empty election.
pub fn show_onboarding(snapshot: &Snapshot, is_admin: bool) -> bool {
    !is_admin && snapshot.phase == ElectionPhase::NotStarted && snapshot.candidates.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockvote_types::{Candidate, Winner};

    fn candidate(id: u64, name: &str, votes: u64) -> Candidate {
        Candidate {
            id,
            name: name.to_string(),
            vote_count: votes,
        }
    }

    fn snapshot(phase: ElectionPhase) -> Snapshot {
        Snapshot {
            phase,
            candidates: vec![candidate(0, "Alice", 3), candidate(1, "Bob", 5)],
            has_voted: false,
            winner: None,
        }
    }

    #[test]
    fn badge_and_heading_follow_the_phase() {
        assert_eq!(status_badge(ElectionPhase::NotStarted).label, "Not Started");
        assert_eq!(status_badge(ElectionPhase::Active).label, "Voting Active");
        assert_eq!(status_badge(ElectionPhase::Ended).label, "Election Ended");

        assert_eq!(results_heading(ElectionPhase::NotStarted), "Candidates");
        assert_eq!(results_heading(ElectionPhase::Active), "Live Results");
        assert_eq!(results_heading(ElectionPhase::Ended), "Final Results");
    }

    #[test]
    fn admin_panel_offers_add_and_start_before_the_election() {
        let panel = admin_panel(ElectionPhase::NotStarted, true, false).unwrap();
        assert!(panel.show_add_candidate);
        assert!(panel.show_start);
        assert!(!panel.show_end);
        assert!(panel.controls_enabled);
    }

    #[test]
    fn admin_panel_offers_only_end_while_active() {
        let panel = admin_panel(ElectionPhase::Active, true, false).unwrap();
        assert!(!panel.show_add_candidate);
        assert!(!panel.show_start);
        assert!(panel.show_end);
    }

    #[test]
    fn admin_panel_hidden_for_non_admins() {
        assert!(admin_panel(ElectionPhase::NotStarted, false, false).is_none());
    }

    #[test]
    fn voted_account_sees_disabled_already_voted_controls() {
        let mut snap = snapshot(ElectionPhase::Active);
        snap.has_voted = true;

        let cards = candidate_cards(&snap, false);
        assert_eq!(cards.len(), 2);
        for card in cards {
            let control = card.vote_control.unwrap();
            assert!(!control.enabled);
            assert_eq!(control.label, "Already Voted");
        }
    }

    #[test]
    fn open_voting_offers_enabled_cast_vote_controls() {
        let cards = candidate_cards(&snapshot(ElectionPhase::Active), false);
        for card in cards {
            let control = card.vote_control.unwrap();
            assert!(control.enabled);
            assert_eq!(control.label, "Cast Vote");
        }
    }

    #[test]
    fn no_vote_controls_outside_the_active_phase() {
        for phase in [ElectionPhase::NotStarted, ElectionPhase::Ended] {
            for card in candidate_cards(&snapshot(phase), false) {
                assert!(card.vote_control.is_none());
            }
        }
    }

    #[test]
    fn in_flight_transaction_disables_vote_controls() {
        let cards = candidate_cards(&snapshot(ElectionPhase::Active), true);
        assert!(!cards[0].vote_control.as_ref().unwrap().enabled);
    }

    #[test]
    fn winner_flag_requires_ended_phase_and_full_tuple_match() {
        let mut snap = snapshot(ElectionPhase::Ended);
        snap.winner = Some(Winner {
            name: "Bob".to_string(),
            vote_count: 5,
        });

        let cards = candidate_cards(&snap, false);
        assert!(!cards[0].is_winner);
        assert!(cards[1].is_winner);

        // Same winner tuple while still active: nobody is flagged.
        snap.phase = ElectionPhase::Active;
        assert!(candidate_cards(&snap, false).iter().all(|c| !c.is_winner));
    }

    #[test]
    fn tied_name_and_count_flags_both_candidates() {
        let snap = Snapshot {
            phase: ElectionPhase::Ended,
            candidates: vec![candidate(0, "Alice", 3), candidate(7, "Alice", 3)],
            has_voted: false,
            winner: Some(Winner {
                name: "Alice".to_string(),
                vote_count: 3,
            }),
        };
        assert!(candidate_cards(&snap, false).iter().all(|c| c.is_winner));
    }

    #[test]
    fn wallet_button_states() {
        let account = Address::parse("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap();
        assert_eq!(
            wallet_button(None, false),
            WalletButton::Connect {
                enabled: true,
                label: "Connect Wallet"
            }
        );
        assert_eq!(
            wallet_button(None, true),
            WalletButton::Connect {
                enabled: false,
                label: "Connecting…"
            }
        );
        assert_eq!(
            wallet_button(Some(&account), false),
            WalletButton::Connected {
                short_account: "0xf39f…2266".to_string()
            }
        );
    }

    #[test]
    fn onboarding_only_for_non_admin_fresh_election() {
        let mut snap = snapshot(ElectionPhase::NotStarted);
        snap.candidates.clear();
        assert!(show_onboarding(&snap, false));
        assert!(!show_onboarding(&snap, true));

        snap.candidates.push(candidate(0, "Alice", 0));
        assert!(!show_onboarding(&snap, false));
    }

    #[test]
    fn empty_state_hint_differs_for_admin() {
        let mut snap = snapshot(ElectionPhase::NotStarted);
        snap.candidates.clear();
        assert!(empty_state(&snap, true).unwrap().hint.contains("admin panel"));
        assert!(empty_state(&snap, false)
            .unwrap()
            .hint
            .contains("admin needs to add"));
        assert!(empty_state(&snapshot(ElectionPhase::Active), false).is_none());
    }
}
