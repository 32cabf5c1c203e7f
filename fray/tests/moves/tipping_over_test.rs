#[cfg(test)]
mod tipping_over_test {
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
    fn fails_without_a_stockpile() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(
            battle.do_move(lead, &Id::from("Tipping Over"), Some(foe)),
            Ok(MoveOutcome::Failed)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Tipping Over|target:Foe,1,0",
                "fail|mon:Lead,0,0",
            ],
        );
        assert_eq!(battle.mon(foe).unwrap().hp, 100);
    }

    #[test]
    fn spends_the_stockpile_and_scales_with_boosts() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        battle.add_volatile(lead, &Id::from("stockpile"), None).unwrap();
        battle
            .boost(lead, &BoostTable::from_iter([(Boost::SpDef, 1), (Boost::Spe, 1)]))
            .unwrap();
        assert_new_logs_eq(
            &mut battle,
            &[
                "addvolatile|mon:Lead,0,0|condition:stockpile",
                "boost|mon:Lead,0,0|stat:spd|by:1",
                "boost|mon:Lead,0,0|stat:spe|by:1",
            ],
        );

        // Two positive stages push the base power from 20 to 60.
        assert_matches!(
            battle.do_move(lead, &Id::from("Tipping Over"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Tipping Over|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:72/100",
                "removevolatile|mon:Lead,0,0|condition:stockpile",
            ],
        );
        assert!(!battle.mon(lead).unwrap().has_volatile(&Id::from("stockpile")));

        // The stockpile is spent, so the follow-up attempt tips nothing.
        assert_matches!(
            battle.do_move(lead, &Id::from("Tipping Over"), Some(foe)),
            Ok(MoveOutcome::Failed)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Tipping Over|target:Foe,1,0",
                "fail|mon:Lead,0,0",
            ],
        );
    }
}
