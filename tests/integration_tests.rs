// Integration tests for Mentor Match

use mentor_match::core::{calculate_match_score, jaccard_similarity, experience_compatibility, rank, Matcher};
use mentor_match::models::{ExperienceLevel, MatchReport, Profile, RegistrationRequest, Role};
use mentor_match::services::{DatasetError, MentorDataset};
use std::io::Write;

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn create_test_profile(
    id: &str,
    role: Role,
    skills: &[&str],
    interests: &[&str],
    goals: &[&str],
    level: ExperienceLevel,
) -> Profile {
    Profile {
        id: id.to_string(),
        name: format!("User {}", id),
        email: format!("{}@example.com", id),
        role,
        skills: labels(skills),
        interests: labels(interests),
        goals: labels(goals),
        experience_level: level,
        bio: None,
        availability: None,
        avatar: None,
    }
}

fn create_mentee() -> Profile {
    create_test_profile(
        "mentee",
        Role::Mentee,
        &["Python", "React", "SQL"],
        &["Research", "Teaching", "Open Source"],
        &["Career Advancement", "Networking"],
        ExperienceLevel::Intermediate,
    )
}

fn expected_total(s: f64, i: f64, g: f64, e: f64) -> u8 {
    (100.0 * (0.4 * s + 0.3 * i + 0.2 * g + 0.1 * e)).round() as u8
}

#[test]
fn test_integration_end_to_end_scoring() {
    let mentee = create_mentee();

    let mentors = vec![
        create_test_profile(
            "a",
            Role::Mentor,
            &["python", "Node.js"],
            &["research", "teaching"],
            &["networking"],
            ExperienceLevel::Expert,
        ),
        create_test_profile(
            "b",
            Role::Mentor,
            &["SQL", "Python", "React", "AWS"],
            &["Open Source"],
            &["Career Advancement", "Networking"],
            ExperienceLevel::Intermediate,
        ),
        create_test_profile(
            "c",
            Role::Mentor,
            &["Docker"],
            &["Security"],
            &[],
            ExperienceLevel::Beginner,
        ),
    ];

    // (skills, interests, goals, experience), computed by hand
    let expected = [
        (1.0 / 4.0, 2.0 / 3.0, 1.0 / 2.0, 1.0),
        (3.0 / 4.0, 1.0 / 3.0, 1.0, 0.7),
        (0.0, 0.0, 0.0, 0.5),
    ];

    for (mentor, (s, i, g, e)) in mentors.iter().zip(expected) {
        assert_eq!(jaccard_similarity(&mentee.skills, &mentor.skills), s);
        assert_eq!(experience_compatibility(mentee.experience_level, mentor.experience_level), e);

        let result = calculate_match_score(&mentee, mentor);
        assert_eq!(result.score, expected_total(s, i, g, e), "mentor {}", mentor.id);
    }

    let ranked = rank(&mentee, &mentors, 10);
    let ids: Vec<&str> = ranked.iter().map(|m| m.mentor.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn test_output_length_is_min_of_top_n_and_mentors() {
    let mentee = create_mentee();
    let mut candidates: Vec<Profile> = (0..7)
        .map(|i| {
            create_test_profile(&format!("m{}", i), Role::Mentor, &["Python"], &[], &[], ExperienceLevel::Advanced)
        })
        .collect();
    candidates.push(create_test_profile("x", Role::Mentee, &["Python"], &[], &[], ExperienceLevel::Advanced));

    for top_n in [1, 5, 7, 8, 10, 100] {
        assert_eq!(rank(&mentee, &candidates, top_n).len(), top_n.min(7));
    }
}

#[test]
fn test_equal_scores_preserve_input_order() {
    let mentee = create_mentee();
    let candidates = vec![
        create_test_profile("low", Role::Mentor, &[], &[], &[], ExperienceLevel::Beginner),
        create_test_profile("tie-1", Role::Mentor, &["Python"], &[], &[], ExperienceLevel::Expert),
        create_test_profile("top", Role::Mentor, &["Python", "React", "SQL"], &[], &[], ExperienceLevel::Expert),
        create_test_profile("tie-2", Role::Mentor, &["react"], &[], &[], ExperienceLevel::Advanced),
        create_test_profile("tie-3", Role::Mentor, &["SQL"], &[], &[], ExperienceLevel::Expert),
    ];

    let ranked = rank(&mentee, &candidates, 10);
    let ids: Vec<&str> = ranked.iter().map(|m| m.mentor.id.as_str()).collect();

    assert_eq!(ids, vec!["top", "tie-1", "tie-2", "tie-3", "low"]);
}

#[test]
fn test_rank_is_idempotent() {
    let dataset = MentorDataset::builtin().unwrap();
    let mentee = create_mentee();

    let first = rank(&mentee, dataset.profiles(), 10);
    let second = rank(&mentee, dataset.profiles(), 10);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_rank_concurrently() {
    let dataset = MentorDataset::builtin().unwrap();
    let mentee = create_mentee();
    let expected = rank(&mentee, dataset.profiles(), 10);
    let (mentee, profiles) = (&mentee, dataset.profiles());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(move |_| scope.spawn(move || rank(mentee, profiles, 10)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_registration_flow_against_builtin_dataset() {
    let request: RegistrationRequest = serde_json::from_str(
        r#"{
            "name": "Jane Doe",
            "email": "jane@example.com",
            "skills": ["Python", "Machine Learning", "AI"],
            "interests": ["Research", "Neural Networks", "AI Ethics"],
            "goals": ["Master Machine Learning", "Build AI Community"],
            "experienceLevel": "beginner"
        }"#,
    )
    .unwrap();

    let mentee = request.into_profile().unwrap();
    let dataset = MentorDataset::builtin().unwrap();
    let matcher = Matcher::default();

    let matches = matcher.rank(&mentee, dataset.profiles(), 10);
    let report = MatchReport::new(&mentee, matches);

    assert_eq!(report.matches.len(), 10);
    assert_eq!(report.summary.matches_found, 10);
    assert_eq!(report.summary.best_score, report.matches[0].score);
    assert!(report.matches.windows(2).all(|pair| pair[0].score >= pair[1].score));
    // The ML research mentor is the obvious first pick
    assert_eq!(report.matches[0].mentor.id, "m1");
}

#[test]
fn test_dataset_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "m1", "name": "A", "email": "a@example.com", "role": "mentor",
              "skills": ["Python"], "experienceLevel": "expert"}},
            {{"id": "u1", "name": "B", "email": "b@example.com", "role": "mentee",
              "skills": ["Python"], "experienceLevel": "beginner"}}
        ]"#
    )
    .unwrap();

    let dataset = MentorDataset::from_path(file.path()).unwrap();
    let ranked = rank(&create_mentee(), dataset.profiles(), 10);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].mentor.id, "m1");
}

#[test]
fn test_missing_dataset_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MentorDataset::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
}
