use fray::battle::Battle;

/// Asserts that new logs in the battle are equal to the given logs.
///
/// Only logs added since the last read-out are compared, so a test can consume setup logs first
/// and assert on one action at a time.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut Battle, want: &[&str]) {
    let got = battle.log.read_out().collect::<Vec<&str>>();
    pretty_assertions::assert_eq!(got, want.to_vec())
}
