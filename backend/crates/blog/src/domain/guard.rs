//! Authorization Guard
//!
//! Pure decision functions over the acting user and a post. No side
//! effects, no storage access; use cases translate a `false` into the
//! matching error so the boundary answers 401/403, never a silent no-op.

use kernel::actor::CurrentUser;

use crate::domain::entity::post::Post;

/// There is an authenticated user on the request.
pub fn require_authenticated(user: Option<&CurrentUser>) -> bool {
    user.is_some()
}

/// Authenticated and the post's author.
pub fn can_edit(user: Option<&CurrentUser>, post: &Post) -> bool {
    match user {
        Some(user) => post.is_author(&user.user_id),
        None => false,
    }
}

/// Same rule as editing.
pub fn can_delete(user: Option<&CurrentUser>, post: &Post) -> bool {
    can_edit(user, post)
}

/// Authenticated and NOT the post's author (no self-comments).
pub fn can_comment(user: Option<&CurrentUser>, post: &Post) -> bool {
    match user {
        Some(user) => !post.is_author(&user.user_id),
        None => false,
    }
}

/// Same ownership-exclusion rule as commenting.
pub fn can_like(user: Option<&CurrentUser>, post: &Post) -> bool {
    can_comment(user, post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::UserId;

    fn current(user_id: UserId) -> CurrentUser {
        CurrentUser {
            user_id,
            user_name: "someone".to_string(),
        }
    }

    fn post_by(author: UserId) -> Post {
        Post::new(author, "Title".into(), "Body".into()).unwrap()
    }

    #[test]
    fn test_require_authenticated() {
        assert!(require_authenticated(Some(&current(UserId::new()))));
        assert!(!require_authenticated(None));
    }

    #[test]
    fn test_can_edit_truth_table() {
        let author = UserId::new();
        let post = post_by(author);

        assert!(can_edit(Some(&current(author)), &post));
        assert!(!can_edit(Some(&current(UserId::new())), &post));
        assert!(!can_edit(None, &post));
    }

    #[test]
    fn test_can_delete_matches_can_edit() {
        let author = UserId::new();
        let post = post_by(author);
        let other = current(UserId::new());

        assert_eq!(
            can_delete(Some(&current(author)), &post),
            can_edit(Some(&current(author)), &post)
        );
        assert_eq!(can_delete(Some(&other), &post), can_edit(Some(&other), &post));
        assert_eq!(can_delete(None, &post), can_edit(None, &post));
    }

    #[test]
    fn test_can_comment_truth_table() {
        let author = UserId::new();
        let post = post_by(author);

        // The author may not comment on their own post
        assert!(!can_comment(Some(&current(author)), &post));
        assert!(can_comment(Some(&current(UserId::new())), &post));
        assert!(!can_comment(None, &post));
    }

    #[test]
    fn test_can_like_matches_can_comment() {
        let author = UserId::new();
        let post = post_by(author);

        assert!(!can_like(Some(&current(author)), &post));
        assert!(can_like(Some(&current(UserId::new())), &post));
        assert!(!can_like(None, &post));
    }
}
