#[cfg(test)]
mod field_condition_test {
    use anyhow::Result;
    use assert_matches::assert_matches;
    use fray::{
        battle::{
            Battle,
            MonData,
            MonHandle,
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
    fn rain_lasts_five_turns() {
        let mut battle = make_battle().unwrap();
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(battle.clear_weather(), Ok(false));

        assert_matches!(battle.set_weather(&Id::from("raindance"), None), Ok(true));
        assert_new_logs_eq(&mut battle, &["weather|weather:Rain Dance"]);

        // Refreshing the same weather is a no-op.
        assert_matches!(battle.set_weather(&Id::from("raindance"), None), Ok(false));
        assert_new_logs_eq(&mut battle, &[]);

        for turn in 2..=5 {
            battle.advance_turn().unwrap();
            assert_new_logs_eq(&mut battle, &["residual", &format!("turn|turn:{turn}")]);
            assert!(battle.field().weather_id().is_some());
        }

        battle.advance_turn().unwrap();
        assert_new_logs_eq(
            &mut battle,
            &["residual", "weatherend|weather:Rain Dance", "turn|turn:6"],
        );
        assert!(battle.field().weather_id().is_none());
    }

    #[test]
    fn a_new_terrain_displaces_the_old() {
        let mut battle = make_battle().unwrap();
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(battle.set_terrain(&Id::from("grassyterrain"), None), Ok(true));
        assert_new_logs_eq(&mut battle, &["fieldstart|condition:Grassy Terrain"]);

        assert_matches!(battle.set_terrain(&Id::from("grassyterrain"), None), Ok(false));
        assert_new_logs_eq(&mut battle, &[]);

        assert_matches!(battle.set_terrain(&Id::from("mistyterrain"), None), Ok(true));
        assert_new_logs_eq(
            &mut battle,
            &[
                "fieldend|condition:Grassy Terrain",
                "fieldstart|condition:Misty Terrain",
            ],
        );
        assert_eq!(
            battle.field().terrain_id(),
            Some(&Id::from("mistyterrain"))
        );

        assert_matches!(battle.clear_terrain(), Ok(true));
        assert_new_logs_eq(&mut battle, &["fieldend|condition:Misty Terrain"]);
        assert!(battle.field().terrain_id().is_none());
        assert_matches!(battle.clear_terrain(), Ok(false));
    }

    #[test]
    fn pseudo_weather_remembers_who_started_it() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(
            battle.add_pseudo_weather(&Id::from("naptime"), Some(lead)),
            Ok(true)
        );
        assert_new_logs_eq(&mut battle, &["fieldstart|condition:Nap Time"]);
        assert_eq!(
            battle
                .field()
                .pseudo_weathers
                .get(&Id::from("naptime"))
                .unwrap()
                .source,
            Some(lead)
        );

        // A second attempt changes nothing, including the source.
        assert_matches!(
            battle.add_pseudo_weather(&Id::from("naptime"), Some(foe)),
            Ok(false)
        );
        assert_new_logs_eq(&mut battle, &[]);
        assert_eq!(
            battle
                .field()
                .pseudo_weathers
                .get(&Id::from("naptime"))
                .unwrap()
                .source,
            Some(lead)
        );

        battle.advance_turn().unwrap();
        assert_new_logs_eq(
            &mut battle,
            &["residual", "fieldend|condition:Nap Time", "turn|turn:2"],
        );
        assert!(!battle.field().has_pseudo_weather(&Id::from("naptime")));
        assert_matches!(battle.remove_pseudo_weather(&Id::from("naptime")), Ok(false));
    }

    #[test]
    fn unknown_field_conditions_are_rejected() {
        let mut battle = make_battle().unwrap();
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(battle.set_weather(&Id::from("sandstorm"), None), Ok(false));
        assert_matches!(battle.set_terrain(&Id::from("electricterrain"), None), Ok(false));
        assert_matches!(
            battle.add_pseudo_weather(&Id::from("trickroom"), None),
            Ok(false)
        );
        assert_new_logs_eq(&mut battle, &[]);
    }
}
