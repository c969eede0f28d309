use focusgate_domain::BlockStats;

#[test]
fn test_first_block_starts_counts() {
    let mut stats = BlockStats::default();
    stats.record_block("2026-08-28");

    assert_eq!(stats.blocks_today, 1);
    assert_eq!(stats.total_blocks, 1);
    assert_eq!(stats.focus_streak, 1);
    assert_eq!(stats.last_block_date.as_deref(), Some("2026-08-28"));
}

#[test]
fn test_same_day_increments_blocks_today() {
    let mut stats = BlockStats::default();
    stats.record_block("2026-08-28");
    stats.record_block("2026-08-28");
    stats.record_block("2026-08-28");

    assert_eq!(stats.blocks_today, 3);
    assert_eq!(stats.total_blocks, 3);
    assert_eq!(stats.focus_streak, 1);
}

#[test]
fn test_new_day_resets_blocks_today_to_one() {
    let mut stats = BlockStats::default();
    stats.record_block("2026-08-27");
    stats.record_block("2026-08-27");
    stats.record_block("2026-08-28");

    assert_eq!(stats.blocks_today, 1);
    assert_eq!(stats.total_blocks, 3);
}

#[test]
fn test_streak_increments_on_consecutive_days() {
    let mut stats = BlockStats::default();
    stats.record_block("2026-08-26");
    stats.record_block("2026-08-27");
    stats.record_block("2026-08-28");

    assert_eq!(stats.focus_streak, 3);
}

#[test]
fn test_streak_resets_after_gap() {
    let mut stats = BlockStats::default();
    stats.record_block("2026-08-20");
    stats.record_block("2026-08-28");

    assert_eq!(stats.focus_streak, 1);
}

#[test]
fn test_unparseable_last_date_resets_streak() {
    let mut stats = BlockStats {
        last_block_date: Some("yesterday-ish".to_string()),
        focus_streak: 5,
        ..Default::default()
    };
    stats.record_block("2026-08-28");
    assert_eq!(stats.focus_streak, 1);
}
