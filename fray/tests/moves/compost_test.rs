#[cfg(test)]
mod compost_test {
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
        Id,
    };
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
    fn heals_without_boosts_when_no_teammate_fell() {
        let mut battle = make_battle().unwrap();
        let (lead, _) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        battle.damage(lead, 40).unwrap();
        assert_new_logs_eq(&mut battle, &["damage|mon:Lead,0,0|health:60/100"]);

        assert_matches!(
            battle.do_move(lead, &Id::from("Compost"), None),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Compost",
                "heal|mon:Lead,0,0|health:100/100",
            ],
        );
        assert_eq!(battle.mon(lead).unwrap().boosts.get(Boost::Atk), 0);
    }

    #[test]
    fn a_loss_last_turn_feeds_the_compost() {
        let mut battle = TestBattleBuilder::new()
            .with_controlled_rng(true)
            .with_seed(0)
            .add_mon_to_side_1(cradily("Lead").unwrap())
            .add_mon_to_side_1(cradily("Backup").unwrap())
            .add_mon_to_side_2(cradily("Foe").unwrap())
            .build(seasonal::dex().unwrap())
            .unwrap();
        let all = battle.all_mon_handles();
        let (lead, backup) = (all[0], all[1]);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        battle.faint(backup).unwrap();
        battle.advance_turn().unwrap();
        battle.damage(lead, 40).unwrap();
        battle.try_set_status(lead, &Id::from("psn"), None).unwrap();
        assert_new_logs_eq(
            &mut battle,
            &[
                "faint|mon:Backup,0,1",
                "residual",
                "turn|turn:2",
                "damage|mon:Lead,0,0|health:60/100",
                "status|mon:Lead,0,0|status:psn",
            ],
        );

        assert_matches!(
            battle.do_move(lead, &Id::from("Compost"), None),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Compost",
                "boost|mon:Lead,0,0|stat:atk|by:1",
                "boost|mon:Lead,0,0|stat:def|by:1",
                "boost|mon:Lead,0,0|stat:spd|by:1",
                "curestatus|mon:Lead,0,0|status:psn",
                "heal|mon:Lead,0,0|health:100/100",
            ],
        );
        assert!(battle.mon(lead).unwrap().status.is_none());

        // The window is one turn wide.
        battle.advance_turn().unwrap();
        battle.damage(lead, 40).unwrap();
        let _ = battle.log.read_out();
        assert_matches!(
            battle.do_move(lead, &Id::from("Compost"), None),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Compost",
                "heal|mon:Lead,0,0|health:100/100",
            ],
        );
    }
}
