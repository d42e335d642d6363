use lecatalogue::{catalog, sample_profiles, UserProfile};
use leconseil::{
    build_learning_path, export, recommend, DEFAULT_TOP_N, MIN_MATCH_SCORE,
};

fn beginner_profile() -> UserProfile {
    UserProfile::from_form_fields(
        "Bachelors Degree",
        "Computer Science",
        "python, excel, sql",
        "communication, problem solving",
        None,
        None,
        0,
    )
    .expect("profile should validate")
}

#[test]
fn full_flow_for_every_sample_profile() {
    for sample in sample_profiles() {
        let ranked = recommend(&sample.profile, catalog(), DEFAULT_TOP_N);

        assert!(ranked.len() <= DEFAULT_TOP_N, "{}", sample.name);
        for pair in ranked.windows(2) {
            assert!(
                pair[0].match_score >= pair[1].match_score,
                "{}: ranking not descending",
                sample.name
            );
        }
        for rec in &ranked {
            assert!(rec.match_score >= MIN_MATCH_SCORE);
            assert!(rec.match_score <= 100);
            assert!(!rec.justification.is_empty());
        }

        let path = build_learning_path(&ranked);
        assert!(path.short_term_plan.len() <= 3);
        assert!(path.medium_term_plan.len() <= 2);
        assert!(path.long_term_plan.len() <= 2);

        let output = export(&ranked, &path);
        assert_eq!(output.user_recommendations.len(), ranked.len());

        let json = serde_json::to_string(&output).expect("export serializes");
        assert!(json.contains("user_recommendations"));
        assert!(json.contains("learning_timeline"));
    }
}

#[test]
fn every_bucketed_course_appears_in_the_ranked_list() {
    let ranked = recommend(&beginner_profile(), catalog(), DEFAULT_TOP_N);
    let path = build_learning_path(&ranked);

    let buckets = path
        .short_term_plan
        .iter()
        .chain(&path.medium_term_plan)
        .chain(&path.long_term_plan);
    for bucketed in buckets {
        let source = ranked
            .iter()
            .find(|r| r.course_id == bucketed.course_id)
            .expect("bucketed course missing from ranked list");
        assert_eq!(source.timeline, bucketed.timeline);
        assert_eq!(source.match_score, bucketed.match_score);
    }
}

#[test]
fn targeted_domain_lifts_matching_courses() {
    let untargeted = beginner_profile();
    let targeted = UserProfile::from_form_fields(
        "Bachelors Degree",
        "Computer Science",
        "python, excel, sql",
        "communication, problem solving",
        Some("Data Science".to_string()),
        None,
        0,
    )
    .expect("profile should validate");

    let base = recommend(&untargeted, catalog(), catalog().len());
    let lifted = recommend(&targeted, catalog(), catalog().len());

    for rec in &lifted {
        if rec.domain.eq_ignore_ascii_case("data science") {
            let before = base
                .iter()
                .find(|r| r.course_id == rec.course_id)
                .map(|r| r.match_score)
                .unwrap_or(0);
            assert!(
                rec.match_score > before,
                "course {} did not gain from domain targeting",
                rec.course_id
            );
        }
    }
}

#[test]
fn empty_catalog_flows_through_cleanly() {
    let ranked = recommend(&beginner_profile(), &[], DEFAULT_TOP_N);
    assert!(ranked.is_empty());

    let path = build_learning_path(&ranked);
    assert!(path.short_term_plan.is_empty());
    assert!(path.medium_term_plan.is_empty());
    assert!(path.long_term_plan.is_empty());

    let output = export(&ranked, &path);
    let json = serde_json::to_value(&output).expect("empty export serializes");
    assert_eq!(json["user_recommendations"].as_array().unwrap().len(), 0);
    assert_eq!(
        json["learning_timeline"]["short_term"].as_array().unwrap().len(),
        0
    );
}
