#[cfg(test)]
mod evoblast_test {
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

    // Lopsided defenses make the chosen category visible in the damage numbers.
    fn lopsided_foe() -> Result<MonData> {
        serde_json::from_str(
            r#"{
                "name": "Foe",
                "species": "Cradily",
                "level": 50,
                "stats": {"hp": 100, "atk": 100, "def": 80, "spa": 100, "spd": 120, "spe": 100},
                "ability": "No Ability"
            }"#,
        )
        .wrap_error()
    }

    fn make_battle() -> Result<Battle> {
        TestBattleBuilder::new()
            .with_controlled_rng(true)
            .with_seed(0)
            .add_mon_to_side_1(cradily("Lead")?)
            .add_mon_to_side_2(lopsided_foe()?)
            .build(seasonal::dex()?)
    }

    fn handles(battle: &Battle) -> (MonHandle, MonHandle) {
        let handles = battle.all_mon_handles();
        (handles[0], handles[1])
    }

    #[test]
    fn category_follows_the_stronger_attacking_stat() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        // Attack and Special Attack tie, so the move stays special and runs into
        // the tall Special Defense.
        assert_matches!(
            battle.do_move(lead, &Id::from("Evoblast"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Evoblast|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:69/100",
            ],
        );

        battle
            .boost(lead, &BoostTable::from_iter([(Boost::Atk, 1)]))
            .unwrap();
        assert_new_logs_eq(&mut battle, &["boost|mon:Lead,0,0|stat:atk|by:1"]);

        // The boosted Attack wins, and the move turns physical into the soft Defense.
        assert_matches!(
            battle.do_move(lead, &Id::from("Evoblast"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Evoblast|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:1/100",
            ],
        );
    }
}
