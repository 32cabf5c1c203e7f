#[cfg(test)]
mod move_usage_test {
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
    use fray_data::{
        Boost,
        BoostTable,
        Id,
    };
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

    fn make_battle() -> Result<Battle> {
        TestBattleBuilder::new()
            .with_controlled_rng(true)
            .with_seed(0)
            .add_mon_to_side_1(cradily("Lead")?)
            .add_mon_to_side_2(cradily("Foe")?)
            .build(seasonal::dex()?)
    }

    fn handles(battle: &Battle) -> (MonHandle, MonHandle) {
        let handles = battle.all_mon_handles();
        (handles[0], handles[1])
    }

    #[test]
    fn single_hit_logs_move_then_damage() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
        rng.insert_fake_values_relative_to_sequence_count([(1, 0), (2, 50)]);
        assert_matches!(
            battle.do_move(lead, &Id::from("Rock Slide"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Rock Slide|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:65/100",
            ],
        );
    }

    #[test]
    fn missed_move_fails_without_touching_the_target() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
        rng.insert_fake_values_relative_to_sequence_count([(1, 95)]);
        assert_matches!(
            battle.do_move(lead, &Id::from("Rock Slide"), Some(foe)),
            Ok(MoveOutcome::Failed)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Rock Slide|target:Foe,1,0",
                "miss|mon:Lead,0,0|target:Foe,1,0",
            ],
        );
        assert_eq!(battle.mon(foe).unwrap().hp, 100);
    }

    #[test]
    fn move_against_fainted_target_fails_before_accuracy() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        battle.faint(foe).unwrap();
        assert_new_logs_eq(&mut battle, &["faint|mon:Foe,1,0"]);

        assert_matches!(
            battle.do_move(lead, &Id::from("Rock Slide"), Some(foe)),
            Ok(MoveOutcome::Failed)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Rock Slide|target:Foe,1,0",
                "fail|mon:Lead,0,0",
            ],
        );
    }

    #[test]
    fn static_damage_ignores_defense_and_can_faint() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        battle
            .boost(foe, &BoostTable::from_iter([(Boost::Def, 6)]))
            .unwrap();
        assert_new_logs_eq(&mut battle, &["boost|mon:Foe,1,0|stat:def|by:6"]);

        assert_matches!(
            battle.do_move(lead, &Id::from("Fang of the Fire King"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Fang of the Fire King|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:0/100",
                "faint|mon:Foe,1,0",
            ],
        );
        assert!(battle.mon(foe).unwrap().fainted);
        // The follow-up burn cannot land on a fainted Mon.
        assert!(battle.mon(foe).unwrap().status.is_none());
    }

    #[test]
    fn drain_heals_half_of_damage_dealt() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        battle.damage(lead, 30).unwrap();
        assert_new_logs_eq(&mut battle, &["damage|mon:Lead,0,0|health:70/100"]);

        let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
        rng.insert_fake_values_relative_to_sequence_count([(1, 0)]);
        assert_matches!(
            battle.do_move(lead, &Id::from("Ultra Succ"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Ultra Succ|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:59/100",
                "boost|mon:Lead,0,0|stat:spe|by:1",
                "heal|mon:Lead,0,0|health:90/100",
            ],
        );
    }

    #[test]
    fn recoil_costs_half_of_damage_dealt() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
        rng.insert_fake_values_relative_to_sequence_count([(1, 0)]);
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
    }

    #[test]
    fn unknown_move_is_an_error() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_matches!(battle.do_move(lead, &Id::from("Swords Dance"), Some(foe)), Err(_));
    }
}
