use proptest::prelude::*;

use blockvote_types::{Address, Candidate, ElectionPhase, TxHash, Winner};

proptest! {
    /// Address parsing accepts any 40 hex digits regardless of case and
    /// always normalizes to the same lowercase form.
    #[test]
    fn address_parse_is_case_insensitive(hex in "[0-9a-fA-F]{40}") {
        let lower = Address::parse(&format!("0x{}", hex.to_lowercase())).unwrap();
        let upper = Address::parse(&format!("0x{}", hex.to_uppercase())).unwrap();
        prop_assert_eq!(&lower, &upper);
        prop_assert_eq!(lower.as_str(), format!("0x{}", hex.to_lowercase()));
    }

    /// Address display round-trips through parse.
    #[test]
    fn address_display_roundtrip(hex in "[0-9a-f]{40}") {
        let address = Address::parse(&format!("0x{hex}")).unwrap();
        let again = Address::parse(&address.to_string()).unwrap();
        prop_assert_eq!(address, again);
    }

    /// Address JSON round-trip preserves equality.
    #[test]
    fn address_serde_roundtrip(hex in "[0-9a-fA-F]{40}") {
        let address = Address::parse(&format!("0x{hex}")).unwrap();
        let encoded = serde_json::to_string(&address).unwrap();
        let decoded: Address = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(address, decoded);
    }

    /// Wrong-length hex strings never parse.
    #[test]
    fn address_rejects_wrong_lengths(hex in "[0-9a-f]{1,39}") {
        let input = format!("0x{}", hex);
        prop_assert!(Address::parse(&input).is_err());
    }

    /// Replaying monotonic contract flags never moves the derived phase
    /// backward.
    #[test]
    fn phase_never_moves_backward(
        steps in prop::collection::vec((any::<bool>(), any::<bool>()), 1..20)
    ) {
        let mut started = false;
        let mut ended = false;
        let mut last = ElectionPhase::from_flags(started, ended).ordinal();
        for (set_started, set_ended) in steps {
            started |= set_started;
            ended |= set_ended;
            let phase = ElectionPhase::from_flags(started, ended).ordinal();
            prop_assert!(phase >= last);
            last = phase;
        }
    }

    /// Voting is open exactly in the Active phase.
    #[test]
    fn voting_open_iff_started_and_not_ended(started in any::<bool>(), ended in any::<bool>()) {
        let phase = ElectionPhase::from_flags(started, ended);
        prop_assert_eq!(phase.voting_open(), started && !ended);
    }

    /// Candidate JSON round-trip through the camelCase wire form.
    #[test]
    fn candidate_serde_roundtrip(id in 0u64..1_000, name in "[A-Za-z ]{1,24}", votes in 0u64..1_000_000) {
        let candidate = Candidate { id, name, vote_count: votes };
        let encoded = serde_json::to_string(&candidate).unwrap();
        prop_assert!(encoded.contains("voteCount"));
        let decoded: Candidate = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(candidate, decoded);
    }

    /// Winner matching requires both fields to agree.
    #[test]
    fn winner_match_is_pair_equality(
        name in "[A-Za-z]{1,12}",
        other in "[A-Za-z]{1,12}",
        votes in 0u64..1_000,
        delta in 1u64..1_000,
    ) {
        let winner = Winner { name: name.clone(), vote_count: votes };
        let exact = Candidate { id: 0, name: name.clone(), vote_count: votes };
        prop_assert!(exact.matches_winner(&winner));

        let wrong_count = Candidate { id: 1, name: name.clone(), vote_count: votes + delta };
        prop_assert!(!wrong_count.matches_winner(&winner));

        let wrong_name = Candidate { id: 2, name: other.clone(), vote_count: votes };
        prop_assert_eq!(wrong_name.matches_winner(&winner), other == name);
    }

    /// TxHash is an opaque pass-through.
    #[test]
    fn tx_hash_roundtrip(raw in "0x[0-9a-f]{1,64}") {
        let hash = TxHash::new(raw.clone());
        prop_assert_eq!(hash.as_str(), raw.as_str());
        prop_assert_eq!(hash.to_string(), raw);
    }
}
