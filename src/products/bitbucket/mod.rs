pub mod client;
pub mod types;

pub use client::BitbucketClient;
pub use types::{
    BitbucketBranch, BitbucketCodeSearchHit, BitbucketCommit, BitbucketPullRequest,
    BitbucketRepository,
};
