//! Proptest strategies for event streams.
//!
//! Streams use players 1 and 2 (registered in [`crate::fixtures::one_vs_one`])
//! plus id 3, which is never registered, so fallbacks get exercised.

use proptest::prelude::*;

use timeline_core::events::{EventKind, GameEvent, PlayerStats, UnitDescriptor};
use timeline_core::players::PlayerId;

const ARMY_UNITS: &[&str] = &["Marine", "Zergling", "Stalker", "Roach", "Mothership"];

fn arb_pid() -> impl Strategy<Value = PlayerId> {
    prop_oneof![4 => 1u32..=2, 1 => Just(3u32)]
}

fn arb_unit_name() -> impl Strategy<Value = String> {
    proptest::sample::select(ARMY_UNITS).prop_map(str::to_string)
}

fn arb_stats() -> impl Strategy<Value = EventKind> {
    (arb_pid(), 0u32..200, 0u32..200, 0u32..80, 0u32..3000, 0u32..1500).prop_map(
        |(pid, used, made, workers, minerals, gas)| {
            EventKind::PlayerStats(PlayerStats {
                pid,
                food_used: used,
                food_made: made,
                workers_active_count: workers,
                minerals_collection_rate: minerals,
                vespene_collection_rate: gas,
            })
        },
    )
}

/// Any event kind the classifier understands.
pub fn arb_event_kind() -> impl Strategy<Value = EventKind> {
    prop_oneof![
        3 => arb_stats(),
        2 => (arb_pid(), arb_unit_name()).prop_map(|(pid, name)| EventKind::UnitBorn {
            control_pid: Some(pid),
            unit: UnitDescriptor::army(name, pid),
        }),
        1 => (arb_pid(), arb_unit_name()).prop_map(|(pid, name)| EventKind::UnitInit {
            control_pid: Some(pid),
            unit: UnitDescriptor::building(name, pid),
        }),
        4 => (arb_pid(), arb_unit_name()).prop_map(|(pid, name)| EventKind::UnitDied {
            killer_pid: None,
            unit: UnitDescriptor::army(name, pid),
        }),
        1 => arb_pid().prop_map(|pid| EventKind::UpgradeComplete {
            pid,
            upgrade_name: "Stimpack".to_string(),
        }),
        1 => Just(EventKind::Other { name: "CameraEvent".to_string() }),
    ]
}

/// A chronological stream of up to `max_len` events.
///
/// Gaps between events are small and often zero, and ticks (multiples of
/// 60) come up regularly.
pub fn arb_event_stream(max_len: usize) -> impl Strategy<Value = Vec<GameEvent>> {
    proptest::collection::vec((0u32..8, arb_event_kind()), 0..max_len).prop_map(|steps| {
        let mut second = 0u32;
        steps
            .into_iter()
            .map(|(gap, kind)| {
                second += gap;
                GameEvent::new(second, kind)
            })
            .collect()
    })
}
