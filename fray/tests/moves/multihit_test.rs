#[cfg(test)]
mod multihit_test {
    use anyhow::Result;
    use assert_matches::assert_matches;
    use fray::{
        battle::{
            Battle,
            MonData,
            MonHandle,
            MoveOutcome,
        },
        dex::Dex,
        effect::MoveHooks,
        error::WrapResultError,
        seasonal,
    };
    use fray_data::{
        Accuracy,
        Id,
        MoveCategory,
        MoveData,
        MoveTarget,
        MultihitType,
        Type,
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

    fn make_battle_with_dex(dex: Dex) -> Result<Battle> {
        TestBattleBuilder::new()
            .with_controlled_rng(true)
            .with_seed(0)
            .add_mon_to_side_1(cradily("Lead")?)
            .add_mon_to_side_2(cradily("Foe")?)
            .build(dex)
    }

    fn make_battle() -> Result<Battle> {
        make_battle_with_dex(seasonal::dex()?)
    }

    fn handles(battle: &Battle) -> (MonHandle, MonHandle) {
        let handles = battle.all_mon_handles();
        (handles[0], handles[1])
    }

    #[test]
    fn each_hit_applies_its_own_follow_up() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
        rng.insert_fake_values_relative_to_sequence_count([(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
        assert_matches!(
            battle.do_move(lead, &Id::from("Devolution Wave"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Devolution Wave|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:87/100",
                "status|mon:Foe,1,0|status:par",
                "damage|mon:Foe,1,0|health:74/100",
                "typechange|mon:Foe,1,0|types:Water",
                "damage|mon:Foe,1,0|health:61/100",
                "sidecondition|side:1|condition:Spikes|layers:1",
                "damage|mon:Foe,1,0|health:48/100",
                "fieldstart|condition:Misty Terrain",
                "damage|mon:Foe,1,0|health:35/100",
                "boost|mon:Lead,0,0|stat:def|by:1",
                "hitcount|hits:5",
            ],
        );
    }

    #[test]
    fn alternate_rolls_swap_abilities_and_set_rocks() {
        let mut foe = cradily("Foe").unwrap();
        foe.ability = "Truant".to_owned();
        let mut battle = TestBattleBuilder::new()
            .with_controlled_rng(true)
            .with_seed(0)
            .add_mon_to_side_1(cradily("Lead").unwrap())
            .add_mon_to_side_2(foe)
            .build(seasonal::dex().unwrap())
            .unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
        rng.insert_fake_values_relative_to_sequence_count([(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)]);
        assert_matches!(
            battle.do_move(lead, &Id::from("Devolution Wave"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Devolution Wave|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:87/100",
                "status|mon:Foe,1,0|status:tox",
                "damage|mon:Foe,1,0|health:74/100",
                "ability|mon:Lead,0,0|ability:Truant",
                "ability|mon:Foe,1,0|ability:No Ability",
                "damage|mon:Foe,1,0|health:61/100",
                "sidecondition|side:1|condition:Stealth Rock|layers:1",
                "damage|mon:Foe,1,0|health:48/100",
                "fieldstart|condition:Grassy Terrain",
                "damage|mon:Foe,1,0|health:35/100",
                "boost|mon:Lead,0,0|stat:atk|by:1",
                "hitcount|hits:5",
            ],
        );
        assert_eq!(battle.mon(lead).unwrap().ability, Id::from("truant"));
        assert_eq!(battle.mon(foe).unwrap().ability, Id::from("noability"));
    }

    #[test]
    fn a_comatose_target_keeps_its_ability_through_the_swap_hit() {
        let mut foe = cradily("Foe").unwrap();
        foe.ability = "Comatose".to_owned();
        let mut battle = TestBattleBuilder::new()
            .with_controlled_rng(true)
            .with_seed(0)
            .add_mon_to_side_1(cradily("Lead").unwrap())
            .add_mon_to_side_2(foe)
            .build(seasonal::dex().unwrap())
            .unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
        rng.insert_fake_values_relative_to_sequence_count([(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)]);
        assert_matches!(
            battle.do_move(lead, &Id::from("Devolution Wave"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        // The second hit's swap is vetoed silently, so the second and third
        // damage records are adjacent.
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Devolution Wave|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:87/100",
                "status|mon:Foe,1,0|status:tox",
                "damage|mon:Foe,1,0|health:74/100",
                "damage|mon:Foe,1,0|health:61/100",
                "sidecondition|side:1|condition:Stealth Rock|layers:1",
                "damage|mon:Foe,1,0|health:48/100",
                "fieldstart|condition:Grassy Terrain",
                "damage|mon:Foe,1,0|health:35/100",
                "boost|mon:Lead,0,0|stat:atk|by:1",
                "hitcount|hits:5",
            ],
        );
        assert_eq!(battle.mon(lead).unwrap().ability, Id::from("noability"));
        assert_eq!(battle.mon(foe).unwrap().ability, Id::from("comatose"));
    }

    #[test]
    fn hit_sequence_stops_when_the_target_faints() {
        let mut battle = make_battle().unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        battle.damage(foe, 80).unwrap();
        assert_new_logs_eq(&mut battle, &["damage|mon:Foe,1,0|health:20/100"]);

        let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
        rng.insert_fake_values_relative_to_sequence_count([(1, 0), (2, 0)]);
        assert_matches!(
            battle.do_move(lead, &Id::from("Devolution Wave"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Devolution Wave|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:7/100",
                "status|mon:Foe,1,0|status:par",
                "damage|mon:Foe,1,0|health:0/100",
                "faint|mon:Foe,1,0",
                "hitcount|hits:2",
            ],
        );
    }

    #[test]
    fn hit_count_samples_the_declared_range() {
        let mut data = seasonal::dex_data();
        data.add_move(
            MoveData {
                name: "Comet Barrage".to_owned(),
                category: MoveCategory::Physical,
                primary_type: Type::Rock,
                base_power: 10,
                accuracy: Accuracy::Exempt,
                pp: 10,
                target: MoveTarget::Normal,
                multihit: Some(MultihitType::Range(2, 5)),
                ..Default::default()
            },
            MoveHooks::default(),
        );
        let mut battle = make_battle_with_dex(Dex::new(data).unwrap()).unwrap();
        let (lead, foe) = handles(&battle);
        assert_new_logs_eq(&mut battle, &["turn|turn:1"]);

        let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
        rng.insert_fake_values_relative_to_sequence_count([(1, 1)]);
        assert_matches!(
            battle.do_move(lead, &Id::from("Comet Barrage"), Some(foe)),
            Ok(MoveOutcome::Success)
        );
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Lead,0,0|name:Comet Barrage|target:Foe,1,0",
                "damage|mon:Foe,1,0|health:94/100",
                "damage|mon:Foe,1,0|health:88/100",
                "damage|mon:Foe,1,0|health:82/100",
                "hitcount|hits:3",
            ],
        );
    }
}
