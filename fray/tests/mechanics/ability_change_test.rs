#[cfg(test)]
mod ability_change_test {
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

    fn cradily_with_ability(name: &str, ability: &str) -> Result<MonData> {
        let mut mon = cradily(name)?;
        mon.ability = ability.to_owned();
        Ok(mon)
    }

    fn make_battle_against(foe: MonData) -> Result<Battle> {
        TestBattleBuilder::new()
            .with_controlled_rng(true)
            .with_seed(0)
            .add_mon_to_side_1(cradily("Lead")?)
            .add_mon_to_side_2(foe)
            .build(seasonal::dex()?)
    }

    fn handles(battle: &Battle) -> (MonHandle, MonHandle) {
        let handles = battle.all_mon_handles();
        (handles[0], handles[1])
    }

    #[test]
    fn setting_an_ability_logs_once_and_sticks() {
        let mut battle = make_battle_against(cradily("Foe").unwrap()).unwrap();
        let (_, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(battle.set_ability(foe, &Id::from("truant")), Ok(true));
        assert_new_logs_eq(&mut battle, &["ability|mon:Foe,1,0|ability:Truant"]);
        assert_eq!(battle.mon(foe).unwrap().ability, Id::from("truant"));

        // Setting the same ability again changes nothing.
        assert_matches!(battle.set_ability(foe, &Id::from("truant")), Ok(false));
        assert_new_logs_eq(&mut battle, &[]);
    }

    #[test]
    fn locked_abilities_resist_replacement_in_both_directions() {
        let mut battle =
            make_battle_against(cradily_with_ability("Foe", "Wonder Guard").unwrap()).unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(battle.set_ability(foe, &Id::from("truant")), Ok(false));
        assert_matches!(battle.set_ability(lead, &Id::from("wonderguard")), Ok(false));
        assert_eq!(battle.mon(foe).unwrap().ability, Id::from("wonderguard"));
        assert_eq!(battle.mon(lead).unwrap().ability, Id::from("noability"));
        assert_new_logs_eq(&mut battle, &[]);
    }

    #[test]
    fn swapping_abilities_logs_both_new_holders() {
        let mut battle =
            make_battle_against(cradily_with_ability("Foe", "Truant").unwrap()).unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(battle.swap_abilities(lead, foe), Ok(true));
        assert_new_logs_eq(
            &mut battle,
            &[
                "ability|mon:Lead,0,0|ability:Truant",
                "ability|mon:Foe,1,0|ability:No Ability",
            ],
        );
        assert_eq!(battle.mon(lead).unwrap().ability, Id::from("truant"));
        assert_eq!(battle.mon(foe).unwrap().ability, Id::from("noability"));
    }

    #[test]
    fn a_locked_ability_vetoes_the_whole_swap() {
        let mut battle =
            make_battle_against(cradily_with_ability("Foe", "Wonder Guard").unwrap()).unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(battle.swap_abilities(lead, foe), Ok(false));
        assert_eq!(battle.mon(lead).unwrap().ability, Id::from("noability"));
        assert_eq!(battle.mon(foe).unwrap().ability, Id::from("wonderguard"));
        assert_new_logs_eq(&mut battle, &[]);
    }

    #[test]
    fn tru_ant_rewrites_the_target_once() {
        let mut battle = make_battle_against(cradily("Foe").unwrap()).unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        assert_matches!(
            battle.do_move(lead, &Id::from("TRU ANT"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:TRU ANT|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:54/100",
                "ability|mon:Foe,1,0|ability:Truant",
            ],
        );

        // The target is already truant, so the rewrite has nothing to do and the
        // hit reports failure after its damage.
        assert_matches!(
            battle.do_move(lead, &Id::from("TRU ANT"), Some(foe)),
            Ok(MoveOutcome::Failed)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:TRU ANT|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:8/100",
                "fail|mon:Lead,0,0",
            ],
        );
    }
}
