// tests/comment_service_unit.rs
use boo_api::application::commands::comments::{
    DeleteCommentCommand, LikeCommentCommand, UnlikeCommentCommand, UpdateCommentCommand,
};
use boo_api::application::error::ApplicationError;
use boo_api::application::queries::comments::{GetCommentQuery, ListCommentsQuery};
use boo_api::domain::comment::{
    CommentId, CommentRepository, CommentText, CommentType, CommentTypes,
};
use boo_api::domain::profile::ProfileId;
use std::sync::Arc;

mod support;
use support::{
    CommentBuilder, FixedClock, comment_id, fixed_now, profile_id, seed_profile, test_context,
    test_context_with_clock,
};

fn expect_bad_request(err: ApplicationError, expected: &str) {
    match err {
        ApplicationError::BadRequest(msg) => assert_eq!(msg, expected),
        other => panic!("expected BadRequest({expected}), got {other:?}"),
    }
}

fn expect_not_found(err: ApplicationError, expected: &str) {
    match err {
        ApplicationError::NotFound(msg) => assert_eq!(msg, expected),
        other => panic!("expected NotFound({expected}), got {other:?}"),
    }
}

#[tokio::test]
async fn created_comment_round_trips_through_get() {
    let ctx = test_context();
    let a = profile_id(&seed_profile(&ctx.services, "A").await);
    let b = profile_id(&seed_profile(&ctx.services, "B").await);

    let created = CommentBuilder::new(b, a)
        .types(&[CommentType::Zodiac, CommentType::Mbti])
        .text("hello there")
        .seed(&ctx.services)
        .await;

    let fetched = ctx
        .services
        .comment_queries
        .get_comment(GetCommentQuery {
            comment_id: comment_id(&created),
        })
        .await
        .unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.user_id, *b.as_uuid());
    assert_eq!(fetched.profile_id, *a.as_uuid());
    assert_eq!(fetched.types, vec![CommentType::Mbti, CommentType::Zodiac]);
    assert_eq!(fetched.text, "hello there");
    assert_eq!(fetched.likes, 0);
    assert!(fetched.likes_by.is_empty());
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn self_comment_is_rejected_without_writing() {
    let ctx = test_context();
    let x = profile_id(&seed_profile(&ctx.services, "X").await);

    let err = ctx
        .services
        .comment_commands
        .create_comment(CommentBuilder::new(x, x).command())
        .await
        .unwrap_err();
    expect_bad_request(err, "You cannot self comment on your profile");

    let listing = ctx
        .services
        .comment_queries
        .list_comments(ListCommentsQuery::for_profile(x))
        .await
        .unwrap();
    assert_eq!(listing.page.total_docs, 0);
}

#[tokio::test]
async fn create_reports_which_profile_is_missing() {
    let ctx = test_context();
    let existing = profile_id(&seed_profile(&ctx.services, "existing").await);
    let ghost = ProfileId::generate();

    let err = ctx
        .services
        .comment_commands
        .create_comment(CommentBuilder::new(existing, ghost).command())
        .await
        .unwrap_err();
    expect_not_found(err, "Profile for comment not found");

    let err = ctx
        .services
        .comment_commands
        .create_comment(CommentBuilder::new(ghost, existing).command())
        .await
        .unwrap_err();
    expect_not_found(err, "User for comment not found");
}

#[tokio::test]
async fn liking_twice_is_rejected_and_count_stays() {
    let ctx = test_context();
    let a = profile_id(&seed_profile(&ctx.services, "A").await);
    let b = profile_id(&seed_profile(&ctx.services, "B").await);
    let c = profile_id(&seed_profile(&ctx.services, "C").await);
    let comment = comment_id(&CommentBuilder::new(b, a).seed(&ctx.services).await);

    let liked = ctx
        .services
        .comment_commands
        .like_comment(LikeCommentCommand {
            comment_id: comment,
            user_id: c,
        })
        .await
        .unwrap();
    assert_eq!(liked.likes, 1);
    assert_eq!(liked.likes_by, vec![*c.as_uuid()]);

    let err = ctx
        .services
        .comment_commands
        .like_comment(LikeCommentCommand {
            comment_id: comment,
            user_id: c,
        })
        .await
        .unwrap_err();
    expect_bad_request(err, "Comment already liked");

    let stored = ctx.comments.find_by_id(comment).await.unwrap().unwrap();
    assert_eq!(stored.likes, 1);
    assert_eq!(stored.likes_by, vec![c]);
}

#[tokio::test]
async fn unlike_requires_an_existing_like() {
    let ctx = test_context();
    let a = profile_id(&seed_profile(&ctx.services, "A").await);
    let b = profile_id(&seed_profile(&ctx.services, "B").await);
    let comment = comment_id(&CommentBuilder::new(b, a).seed(&ctx.services).await);

    let err = ctx
        .services
        .comment_commands
        .unlike_comment(UnlikeCommentCommand {
            comment_id: comment,
            user_id: a,
        })
        .await
        .unwrap_err();
    expect_bad_request(err, "Comment not liked");

    ctx.services
        .comment_commands
        .like_comment(LikeCommentCommand {
            comment_id: comment,
            user_id: a,
        })
        .await
        .unwrap();
    let unliked = ctx
        .services
        .comment_commands
        .unlike_comment(UnlikeCommentCommand {
            comment_id: comment,
            user_id: a,
        })
        .await
        .unwrap();
    assert_eq!(unliked.likes, 0);
    assert!(unliked.likes_by.is_empty());
}

#[tokio::test]
async fn like_checks_comment_before_user() {
    let ctx = test_context();
    let a = profile_id(&seed_profile(&ctx.services, "A").await);
    let b = profile_id(&seed_profile(&ctx.services, "B").await);
    let comment = comment_id(&CommentBuilder::new(b, a).seed(&ctx.services).await);

    let err = ctx
        .services
        .comment_commands
        .like_comment(LikeCommentCommand {
            comment_id: CommentId::generate(),
            user_id: ProfileId::generate(),
        })
        .await
        .unwrap_err();
    expect_not_found(err, "Comment not found");

    let err = ctx
        .services
        .comment_commands
        .unlike_comment(UnlikeCommentCommand {
            comment_id: comment,
            user_id: ProfileId::generate(),
        })
        .await
        .unwrap_err();
    expect_not_found(err, "User for comment not found");
}

#[tokio::test]
async fn likes_match_likers_after_mixed_toggles() {
    let ctx = test_context();
    let target = profile_id(&seed_profile(&ctx.services, "target").await);
    let author = profile_id(&seed_profile(&ctx.services, "author").await);
    let comment = comment_id(&CommentBuilder::new(author, target).seed(&ctx.services).await);

    let mut fans = Vec::new();
    for i in 0..4 {
        fans.push(profile_id(&seed_profile(&ctx.services, &format!("fan{i}")).await));
    }
    for fan in &fans {
        ctx.services
            .comment_commands
            .like_comment(LikeCommentCommand {
                comment_id: comment,
                user_id: *fan,
            })
            .await
            .unwrap();
    }
    for fan in &fans[..2] {
        ctx.services
            .comment_commands
            .unlike_comment(UnlikeCommentCommand {
                comment_id: comment,
                user_id: *fan,
            })
            .await
            .unwrap();
    }

    let stored = ctx.comments.find_by_id(comment).await.unwrap().unwrap();
    assert_eq!(stored.likes, 2);
    assert_eq!(stored.likes as usize, stored.likes_by.len());
    assert_eq!(stored.likes_by, fans[2..].to_vec());
}

#[tokio::test]
async fn concurrent_likes_by_one_user_count_once() {
    let ctx = test_context();
    let a = profile_id(&seed_profile(&ctx.services, "A").await);
    let b = profile_id(&seed_profile(&ctx.services, "B").await);
    let comment = comment_id(&CommentBuilder::new(b, a).seed(&ctx.services).await);

    let attempts = (0..8).map(|_| {
        let services = ctx.services.clone();
        tokio::spawn(async move {
            services
                .comment_commands
                .like_comment(LikeCommentCommand {
                    comment_id: comment,
                    user_id: a,
                })
                .await
        })
    });
    let mut successes = 0;
    for handle in attempts.collect::<Vec<_>>() {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    let stored = ctx.comments.find_by_id(comment).await.unwrap().unwrap();
    assert_eq!(stored.likes, 1);
    assert_eq!(stored.likes_by, vec![a]);
}

#[tokio::test]
async fn update_merges_fields_and_requires_acting_user() {
    let ctx = test_context();
    let a = profile_id(&seed_profile(&ctx.services, "A").await);
    let b = profile_id(&seed_profile(&ctx.services, "B").await);
    let created = CommentBuilder::new(b, a).text("first").seed(&ctx.services).await;
    let comment = comment_id(&created);

    let updated = ctx
        .services
        .comment_commands
        .update_comment(UpdateCommentCommand {
            comment_id: comment,
            user_id: b,
            text: Some(CommentText::new("second").unwrap()),
            types: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.text, "second");
    assert_eq!(updated.types, vec![CommentType::Mbti]);
    assert!(updated.updated_at > created.updated_at);

    let err = ctx
        .services
        .comment_commands
        .update_comment(UpdateCommentCommand {
            comment_id: comment,
            user_id: ProfileId::generate(),
            text: None,
            types: Some(CommentTypes::new([CommentType::Enneagram]).unwrap()),
        })
        .await
        .unwrap_err();
    expect_not_found(err, "User for comment not found");

    let err = ctx
        .services
        .comment_commands
        .update_comment(UpdateCommentCommand {
            comment_id: CommentId::generate(),
            user_id: b,
            text: None,
            types: None,
        })
        .await
        .unwrap_err();
    expect_not_found(err, "Comment not found");
}

#[tokio::test]
async fn delete_removes_comment_once() {
    let ctx = test_context();
    let a = profile_id(&seed_profile(&ctx.services, "A").await);
    let b = profile_id(&seed_profile(&ctx.services, "B").await);
    let comment = comment_id(&CommentBuilder::new(b, a).seed(&ctx.services).await);

    ctx.services
        .comment_commands
        .delete_comment(DeleteCommentCommand {
            comment_id: comment,
        })
        .await
        .unwrap();

    let err = ctx
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand {
            comment_id: comment,
        })
        .await
        .unwrap_err();
    expect_not_found(err, "Comment not found");

    let err = ctx
        .services
        .comment_queries
        .get_comment(GetCommentQuery {
            comment_id: comment,
        })
        .await
        .unwrap_err();
    expect_not_found(err, "Comment not found");
}

#[tokio::test]
async fn like_and_unlike_are_stamped_by_the_service_clock() {
    let ctx = test_context_with_clock(Arc::new(FixedClock));
    let a = profile_id(&seed_profile(&ctx.services, "A").await);
    let b = profile_id(&seed_profile(&ctx.services, "B").await);
    let comment = comment_id(&CommentBuilder::new(b, a).seed(&ctx.services).await);

    let liked = ctx
        .services
        .comment_commands
        .like_comment(LikeCommentCommand {
            comment_id: comment,
            user_id: a,
        })
        .await
        .unwrap();
    assert_eq!(liked.updated_at, fixed_now());

    let unliked = ctx
        .services
        .comment_commands
        .unlike_comment(UnlikeCommentCommand {
            comment_id: comment,
            user_id: a,
        })
        .await
        .unwrap();
    assert_eq!(unliked.updated_at, fixed_now());
}
