#[cfg(test)]
mod stat_boost_test {
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
    fn quack_raises_defense_and_special_attack() {
        let mut battle = make_battle().unwrap();
        let (lead, _) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(
            battle.do_move(lead, &Id::from("Quack"), None),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Quack",
                "boost|mon:Lead,0,0|stat:def|by:1",
                "boost|mon:Lead,0,0|stat:spa|by:1",
            ],
        );
    }

    #[test]
    fn restarting_router_raises_special_attack_and_speed() {
        let mut battle = make_battle().unwrap();
        let (lead, _) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(
            battle.do_move(lead, &Id::from("Restarting Router"), None),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Restarting Router",
                "boost|mon:Lead,0,0|stat:spa|by:1",
                "boost|mon:Lead,0,0|stat:spe|by:1",
            ],
        );
    }

    #[test]
    fn scripting_boosts_and_summons_rain() {
        let mut battle = make_battle().unwrap();
        let (lead, _) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(
            battle.do_move(lead, &Id::from("Scripting"), None),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Scripting",
                "boost|mon:Lead,0,0|stat:spa|by:1",
                "weather|weather:Rain Dance",
            ],
        );
        assert_eq!(
            battle.field().weather_id().map(|id| id.as_str()),
            Some("raindance")
        );
    }

    #[test]
    fn protein_shake_stacks_its_multiplier_on_repeat_use() {
        let mut battle = make_battle().unwrap();
        let (lead, _) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(
            battle.do_move(lead, &Id::from("Protein Shake"), None),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Protein Shake",
                "boost|mon:Lead,0,0|stat:atk|by:1",
                "boost|mon:Lead,0,0|stat:def|by:1",
                "boost|mon:Lead,0,0|stat:spe|by:1",
                "addvolatile|mon:Lead,0,0|condition:Protein Shake",
            ],
        );

        // The second shake boosts again and feeds the existing volatile instead of
        // re-adding it.
        assert_matches!(
            battle.do_move(lead, &Id::from("Protein Shake"), None),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Protein Shake",
                "boost|mon:Lead,0,0|stat:atk|by:1",
                "boost|mon:Lead,0,0|stat:def|by:1",
                "boost|mon:Lead,0,0|stat:spe|by:1",
            ],
        );
        let multiplier = battle
            .mon(lead)
            .unwrap()
            .volatiles
            .get(&Id::from("proteinshake"))
            .unwrap()
            .state
            .get_u64("multiplier");
        assert_eq!(multiplier, Some(2));
    }

    #[test]
    fn bar_fight_riles_up_both_sides() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(
            battle.do_move(lead, &Id::from("Bar Fight"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Bar Fight|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:94/100",
                "boost|mon:Foe,1,0|stat:atk|by:3",
                "unboost|mon:Foe,1,0|stat:def|by:3",
                "boost|mon:Lead,0,0|stat:atk|by:3",
                "unboost|mon:Lead,0,0|stat:def|by:3",
                "addvolatile|mon:Foe,1,0|condition:confusion",
                "addvolatile|mon:Lead,0,0|condition:confusion",
            ],
        );
        assert!(battle.mon(lead).unwrap().has_volatile(&Id::from("confusion")));
        assert!(battle.mon(foe).unwrap().has_volatile(&Id::from("confusion")));
    }
}
