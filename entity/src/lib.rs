pub mod comment;
pub mod place;
pub mod post;
pub mod post_place;
pub mod post_subject;
pub mod session;
pub mod subject;
pub mod user;
pub mod user_comment;
pub mod user_post;

/*
 Users sign up with a short handle they pick themselves, then log in to post.
 A post belongs to exactly one author and can tag places, subjects and other
 users through the join tables; comments hang off a post the same way.
 so the flow would be:
 Noah signs up as "noah" and posts "lunch at the pier" tagged with the place
 "pier" and the subject "food".
 Maya comments on it and tags Noah in the comment.
 Anyone can read the feed; only logged-in users can write to it.
 */
