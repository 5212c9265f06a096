//! Estatísticas agregadas dos posts de um membro

use linkdapi::{Engagements, RawPost};
use serde::Serialize;

use crate::utils::truncate_chars_with_suffix;

const PREVIEW_CHARS: usize = 200;
const MAX_POSTS: usize = 10;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Engagement {
    pub reactions: u64,
    pub comments: u64,
    pub reposts: u64,
    pub total: u64,
}

impl From<Engagements> for Engagement {
    fn from(e: Engagements) -> Self {
        let reactions = e.total_reactions.unwrap_or(0);
        let comments = e.comments_count.unwrap_or(0);
        let reposts = e.reposts_count.unwrap_or(0);
        Self {
            reactions,
            comments,
            reposts,
            total: reactions + comments + reposts,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReactionDetail {
    #[serde(rename = "type")]
    pub reaction_type: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: Option<String>,
    pub text: String,
    pub full_text: String,
    pub url: Option<String>,
    pub posted_at: Option<String>,
    pub relative_time: Option<String>,
    pub is_repost: bool,
    pub edited: Option<bool>,
    pub engagement: Engagement,
    pub reaction_details: Vec<ReactionDetail>,
    pub has_media: bool,
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopPost {
    pub text: String,
    pub url: Option<String>,
    pub engagement: Engagement,
}

/// Documento devolvido em `data` por `/api/linkedin/posts`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostsStats {
    pub posts: Vec<PostSummary>,
    pub total_posts: usize,
    pub total_reactions: u64,
    pub total_comments: u64,
    pub total_reposts: u64,
    pub average_engagement: u64,
    pub top_post: Option<TopPost>,
}

impl PostsStats {
    /// Resposta usada quando a LinkdAPI não devolve posts
    pub fn empty() -> Self {
        Self {
            posts: Vec::new(),
            total_posts: 0,
            total_reactions: 0,
            total_comments: 0,
            total_reposts: 0,
            average_engagement: 0,
            top_post: None,
        }
    }
}

fn summarize(post: RawPost, text: String) -> PostSummary {
    let mut engagements = post.engagements.unwrap_or_default();
    let reaction_details = engagements
        .reactions
        .take()
        .unwrap_or_default()
        .into_iter()
        .map(|r| ReactionDetail {
            reaction_type: r.reaction_type.to_lowercase(),
            count: r.reaction_count,
        })
        .collect();

    let media = post.media_content.unwrap_or_default();
    let posted_at = post.posted_at.unwrap_or_default();

    PostSummary {
        id: post.urn,
        text: truncate_chars_with_suffix(&text, PREVIEW_CHARS, "..."),
        full_text: text,
        url: post.url,
        posted_at: posted_at.full_date.filter(|d| !d.is_empty()),
        relative_time: posted_at.relative_day.filter(|d| !d.is_empty()),
        is_repost: post.header.as_deref().map_or(false, |h| h.contains("reposted")),
        edited: post.edited,
        engagement: Engagement::from(engagements),
        reaction_details,
        has_media: !media.is_empty(),
        media_type: media
            .into_iter()
            .next()
            .and_then(|m| m.media_type)
            .filter(|t| !t.is_empty()),
    }
}

/// Formata os posts e calcula totais, média e o post de maior engajamento
///
/// Posts sem texto são descartados antes de qualquer conta. Em empate de
/// engajamento vence o primeiro.
pub fn build_posts_stats(raw_posts: Vec<RawPost>) -> PostsStats {
    let mut posts: Vec<PostSummary> = raw_posts
        .into_iter()
        .filter_map(|mut post| {
            let text = post.text.take().filter(|t| !t.is_empty())?;
            Some(summarize(post, text))
        })
        .collect();

    let total_reactions = posts.iter().map(|p| p.engagement.reactions).sum::<u64>();
    let total_comments = posts.iter().map(|p| p.engagement.comments).sum::<u64>();
    let total_reposts = posts.iter().map(|p| p.engagement.reposts).sum::<u64>();
    let total_posts = posts.len();

    let average_engagement = if total_posts > 0 {
        ((total_reactions + total_comments + total_reposts) as f64 / total_posts as f64).round() as u64
    } else {
        0
    };

    let mut top: Option<&PostSummary> = None;
    for post in &posts {
        if top.map_or(true, |best| post.engagement.total > best.engagement.total) {
            top = Some(post);
        }
    }
    let top_post = top.map(|p| TopPost {
        text: p.text.clone(),
        url: p.url.clone(),
        engagement: p.engagement,
    });

    posts.truncate(MAX_POSTS);

    PostsStats {
        posts,
        total_posts,
        total_reactions,
        total_comments,
        total_reposts,
        average_engagement,
        top_post,
    }
}
