use whatsfordinner_decision::{
    Answers, Flow, FlowResult, FlowStep, Mode, QuestionKey, Snapshot, build_result,
};

mod helpers;

use helpers::{First, Last, Spy};

#[test]
fn test_quick_asian_recipe_matches_strictly() {
    let recipes = vec![helpers::recipe("1", "Pad Thai", Some(25), &["asian"])];
    let snapshot = Snapshot {
        recipes: &recipes,
        ..Default::default()
    };
    let answers = Answers::new()
        .with(QuestionKey::Time, "quick")
        .with(QuestionKey::Cuisine, "asian")
        .with(QuestionKey::Protein, "any");

    let result = build_result(Mode::Cook, &answers, &snapshot, None, &mut First);

    assert_eq!(result, FlowResult::Recipe(recipes[0].clone()));
}

#[test]
fn test_slow_recipe_survives_through_unfiltered_fallback() {
    let recipes = vec![helpers::recipe("1", "Slow Roast", Some(180), &[])];
    let snapshot = Snapshot {
        recipes: &recipes,
        ..Default::default()
    };
    let answers = Answers::new().with(QuestionKey::Time, "quick");

    let result = build_result(Mode::Cook, &answers, &snapshot, None, &mut First);

    assert_eq!(result.display_name(), Some("Slow Roast"));
}

#[test]
fn test_vibe_never_empties_the_service_pool() {
    let restaurants = vec![
        helpers::restaurant("A", true, false, None),
        helpers::restaurant("B", false, true, None),
    ];
    let snapshot = Snapshot {
        restaurants: &restaurants,
        ..Default::default()
    };
    let answers = Answers::new()
        .with(QuestionKey::Service, "dineIn")
        .with(QuestionKey::Vibe, "fancy");

    for _ in 0..10 {
        let result = build_result(Mode::GoOut, &answers, &snapshot, None, &mut Last);
        assert_eq!(result, FlowResult::Restaurant(restaurants[0].clone()));
    }
}

#[test]
fn test_pantry_overlap_narrows_generation_to_top_tier() {
    let pantry = helpers::pantry(&["chicken breast", "rice"]);
    let snapshot = Snapshot {
        pantry: &pantry,
        ..Default::default()
    };
    let mut spy = Spy::default();

    let result = build_result(Mode::Generate, &Answers::new(), &snapshot, None, &mut spy);

    let FlowResult::Meal { idea, pantry: used } = result else {
        panic!("expected a meal, got {result:?}");
    };
    assert_eq!(idea.name, "Chicken & Rice");
    assert_eq!(used, pantry);
    assert_eq!(spy.lens, vec![1]);
}

#[test]
fn test_empty_pantry_skips_questions() {
    let mut flow = Flow::new();
    let mut spy = Spy::default();

    let step = flow.choose_mode(Mode::Generate, &Snapshot::default()).unwrap();

    assert_eq!(step, FlowStep::Result);
    assert_eq!(flow.result(), Some(&FlowResult::EmptyPantry));
    assert!(flow.current_question().is_none());
    assert!(flow.try_again(&Snapshot::default(), &mut spy).is_err());
    assert!(spy.lens.is_empty());
}

#[test]
fn test_empty_collections_report_mode() {
    let snapshot = Snapshot::default();

    assert_eq!(
        build_result(Mode::Cook, &Answers::new(), &snapshot, None, &mut First),
        FlowResult::Empty { mode: Mode::Cook }
    );
    assert_eq!(
        build_result(Mode::GoOut, &Answers::new(), &snapshot, None, &mut First),
        FlowResult::Empty { mode: Mode::GoOut }
    );
}
