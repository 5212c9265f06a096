pub mod linkedin_posts;
pub mod posts_stats;
pub mod profile_stats;

pub use linkedin_posts::{LinkedInPostsService, PublishedPost};
pub use posts_stats::{build_posts_stats, PostsStats};
pub use profile_stats::{build_profile_stats, ProfileStats};
