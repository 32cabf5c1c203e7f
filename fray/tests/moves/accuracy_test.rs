#[cfg(test)]
mod accuracy_test {
    use anyhow::Result;
    use assert_matches::assert_matches;
    use fray::{
        battle::{
            Battle,
            MonData,
            MonHandle,
            MoveOutcome,
        },
        error::WrapResultError,
        seasonal,
    };
    use fray_data::Id;
    use fray_test_utils::{
        TestBattleBuilder,
        assert_new_logs_eq,
        get_controlled_rng_for_battle,
    };

    fn cradily(name: &str) -> Result<MonData> {
        let mut mon: MonData = serde_json::from_str(
            r#"{
                "name": "Lead",
                "species": "Cradily",
                "level": 50,
                "stats": {"hp": 100, "atk": 100, "def": 100, "spa": 100, "spd": 100, "spe": 100},
                "ability": "No Ability"
            }"#,
        )
        .wrap_error()?;
        mon.name = name.to_owned();
        Ok(mon)
    }

    fn gyarados(name: &str) -> Result<MonData> {
        let mut mon: MonData = serde_json::from_str(
            r#"{
                "name": "Foe",
                "species": "Gyarados",
                "level": 50,
                "stats": {"hp": 100, "atk": 100, "def": 100, "spa": 100, "spd": 100, "spe": 100},
                "ability": "No Ability"
            }"#,
        )
        .wrap_error()?;
        mon.name = name.to_owned();
        Ok(mon)
    }

    fn make_battle() -> Result<Battle> {
        TestBattleBuilder::new()
            .with_controlled_rng(true)
            .with_seed(0)
            .add_mon_to_side_1(cradily("Lead")?)
            .add_mon_to_side_2(gyarados("Foe")?)
            .build(seasonal::dex()?)
    }

    fn handles(battle: &Battle) -> (MonHandle, MonHandle) {
        let handles = battle.all_mon_handles();
        (handles[0], handles[1])
    }

    #[test]
    fn blimp_crash_skips_the_roll_against_airborne_targets() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        // The fake roll would miss. An airborne target never consumes it.
        let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
        rng.insert_fake_values_relative_to_sequence_count([(1, 99)]);
        assert_matches!(
            battle.do_move(lead, &Id::from("Blimp Crash"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Blimp Crash|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:26/100",
                "addvolatile|mon:Foe,1,0|condition:smackdown",
                "addvolatile|mon:Lead,0,0|condition:smackdown",
                "damage|mon:Lead,0,0|health:63/100",
            ],
        );

        // The first hit grounded the target, so the same roll now happens and misses.
        assert_matches!(
            battle.do_move(lead, &Id::from("Blimp Crash"), Some(foe)),
            Ok(MoveOutcome::Failed)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Blimp Crash|target:Foe,1,0",
                "miss|mon:Lead,0,0|target:Foe,1,0",
            ],
        );
    }

    #[test]
    fn iron_ball_grounds_its_holder() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert!(!battle.mon(foe).unwrap().is_grounded());
        battle.set_item(foe, &Id::from("ironball")).unwrap();
        assert!(battle.mon(foe).unwrap().is_grounded());
        assert_new_logs_eq(&mut battle, &["item|mon:Foe,1,0|item:Iron Ball"]);

        let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
        rng.insert_fake_values_relative_to_sequence_count([(1, 85)]);
        assert_matches!(
            battle.do_move(lead, &Id::from("Blimp Crash"), Some(foe)),
            Ok(MoveOutcome::Failed)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Blimp Crash|target:Foe,1,0",
                "miss|mon:Lead,0,0|target:Foe,1,0",
            ],
        );
    }
}
