#[cfg(test)]
mod trapping_test {
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
    fn partial_trap_wears_off_while_the_full_trap_stays() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        // The partial trap samples the short four-turn duration.
        let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
        rng.insert_fake_values_relative_to_sequence_count([(1, 0), (2, 0)]);
        assert_matches!(
            battle.do_move(lead, &Id::from("Maelström"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Maelström|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:54/100",
                "addvolatile|mon:Foe,1,0|condition:partiallytrapped",
                "addvolatile|mon:Foe,1,0|condition:trapped",
            ],
        );

        for turn in 2..=4 {
            battle.advance_turn().unwrap();
            assert_new_logs_eq(&mut battle, &["residual", &format!("turn|turn:{turn}")]);
        }

        battle.advance_turn().unwrap();
        assert_new_logs_eq(
            &mut battle,
            &[
                "residual",
                "removevolatile|mon:Foe,1,0|condition:partiallytrapped",
                "turn|turn:5",
            ],
        );
        assert!(!battle.mon(foe).unwrap().has_volatile(&Id::from("partiallytrapped")));
        assert!(battle.mon(foe).unwrap().has_volatile(&Id::from("trapped")));
    }
}
