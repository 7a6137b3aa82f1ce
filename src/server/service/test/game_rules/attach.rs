use super::*;

/// Tests attaching a rule set that does not exist.
///
/// Expected: Err(NotFound) and the match still on default rules
#[tokio::test]
async fn rejects_unknown_rule_set() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_match_with_dependencies(db).await?;
    let service = GameRulesService::new(db);

    let result = service.attach(game.id, Some(999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.rules_for_match(game.id).await?, GameRules::default());

    Ok(())
}

/// Tests attaching rules to a match that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rules = factory::game_rules::GameRulesFactory::new(db).build().await?;

    let result = GameRulesService::new(db).attach(999, Some(rules.id)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests attaching and then detaching a rule set.
///
/// Expected: the match follows the attached periods, then falls back to defaults
#[tokio::test]
async fn attaches_and_detaches_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_match_with_dependencies(db).await?;
    let rules = factory::game_rules::GameRulesFactory::new(db)
        .periods(2)
        .minutes_per_period(20)
        .halftime_after_period(1)
        .build()
        .await?;
    let service = GameRulesService::new(db);

    let attached = service.attach(game.id, Some(rules.id)).await?;
    assert_eq!(attached.periods, 2);
    assert_eq!(service.rules_for_match(game.id).await?.minutes_per_period, 20);

    service.attach(game.id, None).await?;
    assert_eq!(service.rules_for_match(game.id).await?, GameRules::default());

    Ok(())
}
