//! Profile completion scoring.
//!
//! Six tracked attributes decide how filled-in a member profile is. The
//! profile page sizes its progress bar from the percentage and renders the
//! prompts for whatever is still missing.

use crate::stores::users::User;

/// A tracked attribute: stable key, the prompt shown while the attribute is
/// missing, and the predicate deciding whether it counts as filled in.
pub struct CompletionField {
    pub key: &'static str,
    pub label: &'static str,
    satisfied: fn(&User) -> bool,
}

/// Completion summary for a single user record. Built fresh on every call,
/// never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResult {
    /// 0-100, rounded to the nearest integer.
    pub percentage: u8,
    /// Prompts for the unfilled attributes, in `COMPLETION_FIELDS` order.
    pub missing_fields: Vec<&'static str>,
}

/// Canonical attribute order. `missing_fields` filters this table, so the
/// rendered prompts always appear in the same order.
pub static COMPLETION_FIELDS: [CompletionField; 6] = [
    CompletionField {
        key: "bio",
        label: "Add a bio",
        satisfied: has_bio,
    },
    CompletionField {
        key: "skills",
        label: "Add at least one skill",
        satisfied: has_skills,
    },
    CompletionField {
        key: "profileImage",
        label: "Upload a profile image",
        satisfied: has_profile_image,
    },
    CompletionField {
        key: "title",
        label: "Add a title",
        satisfied: has_title,
    },
    CompletionField {
        key: "email",
        label: "Add your email",
        satisfied: has_email,
    },
    CompletionField {
        key: "username",
        label: "Add a username",
        satisfied: has_username,
    },
];

/// Score `user` against the six tracked attributes.
///
/// Pure and total: an absent or empty value counts as unfilled, never as an
/// error. The percentage rounds half away from zero (`f64::round`); with six
/// equally weighted attributes the reachable values are exactly
/// 0, 17, 33, 50, 67, 83 and 100.
pub fn compute(user: &User) -> CompletionResult {
    let satisfied = COMPLETION_FIELDS
        .iter()
        .filter(|field| (field.satisfied)(user))
        .count();

    let missing_fields = COMPLETION_FIELDS
        .iter()
        .filter(|field| !(field.satisfied)(user))
        .map(|field| field.label)
        .collect();

    let percentage =
        (satisfied as f64 * 100.0 / COMPLETION_FIELDS.len() as f64).round() as u8;

    CompletionResult {
        percentage,
        missing_fields,
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}

fn has_bio(user: &User) -> bool {
    has_text(user.bio.as_deref())
}

fn has_skills(user: &User) -> bool {
    user.skills.as_ref().is_some_and(|skills| !skills.is_empty())
}

fn has_profile_image(user: &User) -> bool {
    has_text(user.profile_image.as_deref())
}

fn has_title(user: &User) -> bool {
    has_text(user.title.as_deref())
}

fn has_email(user: &User) -> bool {
    has_text(user.email.as_deref())
}

fn has_username(user: &User) -> bool {
    has_text(user.username.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_user() -> User {
        User {
            id: 1,
            username: None,
            email: None,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            title: None,
            bio: None,
            skills: None,
            profile_image: None,
            experience_level: None,
            open_to_collaborate: None,
            is_online: None,
            last_seen: None,
        }
    }

    fn full_user() -> User {
        User {
            username: Some("u".to_string()),
            email: Some("e".to_string()),
            title: Some("z".to_string()),
            bio: Some("x".to_string()),
            skills: Some(vec!["a".to_string()]),
            profile_image: Some("y".to_string()),
            ..empty_user()
        }
    }

    const ALL_LABELS: [&str; 6] = [
        "Add a bio",
        "Add at least one skill",
        "Upload a profile image",
        "Add a title",
        "Add your email",
        "Add a username",
    ];

    #[test]
    fn test_all_fields_filled() {
        let result = compute(&full_user());
        assert_eq!(result.percentage, 100);
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn test_all_fields_missing() {
        let result = compute(&empty_user());
        assert_eq!(result.percentage, 0);
        assert_eq!(result.missing_fields, ALL_LABELS.to_vec());
    }

    #[test]
    fn test_only_skills_filled() {
        let user = User {
            skills: Some(vec!["a".to_string()]),
            ..empty_user()
        };
        let result = compute(&user);
        assert_eq!(result.percentage, 17);
        assert_eq!(
            result.missing_fields,
            vec![
                "Add a bio",
                "Upload a profile image",
                "Add a title",
                "Add your email",
                "Add a username",
            ]
        );
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let user = User {
            bio: Some(String::new()),
            ..empty_user()
        };
        let result = compute(&user);
        assert_eq!(result.percentage, 0);
        assert!(result.missing_fields.contains(&"Add a bio"));
    }

    #[test]
    fn test_empty_skills_list_counts_as_missing() {
        let user = User {
            skills: Some(Vec::new()),
            ..empty_user()
        };
        let result = compute(&user);
        assert!(result.missing_fields.contains(&"Add at least one skill"));
    }

    #[test]
    fn test_percentage_per_satisfied_count() {
        // One attribute at a time, cumulatively
        let mut user = empty_user();
        let expected = [17, 33, 50, 67, 83, 100];

        user.bio = Some("x".to_string());
        assert_eq!(compute(&user).percentage, expected[0]);
        user.skills = Some(vec!["a".to_string()]);
        assert_eq!(compute(&user).percentage, expected[1]);
        user.profile_image = Some("y".to_string());
        assert_eq!(compute(&user).percentage, expected[2]);
        user.title = Some("z".to_string());
        assert_eq!(compute(&user).percentage, expected[3]);
        user.email = Some("e".to_string());
        assert_eq!(compute(&user).percentage, expected[4]);
        user.username = Some("u".to_string());
        assert_eq!(compute(&user).percentage, expected[5]);
    }

    #[test]
    fn test_missing_count_matches_unsatisfied_count() {
        let user = User {
            email: Some("e".to_string()),
            title: Some("z".to_string()),
            ..empty_user()
        };
        let result = compute(&user);
        assert_eq!(result.missing_fields.len(), 4);
    }

    #[test]
    fn test_missing_fields_preserve_canonical_order() {
        let user = User {
            skills: Some(vec!["a".to_string()]),
            email: Some("e".to_string()),
            ..empty_user()
        };
        let result = compute(&user);
        assert_eq!(
            result.missing_fields,
            vec![
                "Add a bio",
                "Upload a profile image",
                "Add a title",
                "Add a username",
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let user = User {
            bio: Some("hello".to_string()),
            ..empty_user()
        };
        assert_eq!(compute(&user), compute(&user));
    }

    #[test]
    fn test_field_table_order() {
        let keys: Vec<&str> = COMPLETION_FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            vec!["bio", "skills", "profileImage", "title", "email", "username"]
        );
    }
}
