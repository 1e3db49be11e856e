#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` / `_date` postfix are stored
// as unix timestamps in **seconds**.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub display_name: &'a str,
    pub role: i16,
}

#[derive(Queryable)]
pub struct UserRow {
    pub rowid: i64,
    pub email: String,
    pub display_name: String,
    pub role: i16,
}

#[derive(Insertable)]
#[diesel(table_name = organizations)]
pub struct NewOrganization<'a> {
    pub id: &'a str,
    pub user_rowid: i64,
    pub name: &'a str,
    pub tax_id: i64,
    pub website: Option<&'a str>,
    pub slogan: Option<&'a str>,
}

#[derive(Queryable)]
pub struct OrganizationRow {
    pub rowid: i64,
    pub id: String,
    pub user_rowid: i64,
    pub name: String,
    pub tax_id: i64,
    pub website: Option<String>,
    pub slogan: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = tour_guide)]
pub struct NewTourGuide<'a> {
    pub id: &'a str,
    pub user_rowid: i64,
    pub school: &'a str,
    pub description: &'a str,
    pub cv_url: Option<&'a str>,
    pub avg_rating: Option<f64>,
    pub total_reviews: i64,
    pub rating_penalty: f64,
}

#[derive(Queryable)]
pub struct TourGuideRow {
    pub rowid: i64,
    pub id: String,
    pub user_rowid: i64,
    pub school: String,
    pub description: String,
    pub cv_url: Option<String>,
    pub avg_rating: Option<f64>,
    pub total_reviews: i64,
    pub rating_penalty: f64,
}

#[derive(Insertable)]
#[diesel(table_name = tour_guide_certificate)]
pub struct NewTourGuideCertificate<'a> {
    pub parent_rowid: i64,
    pub certificate: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = tour_guide_work_experience)]
pub struct NewTourGuideWorkExperience<'a> {
    pub parent_rowid: i64,
    pub experience: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = tours)]
pub struct NewTour<'a> {
    pub id: &'a str,
    pub org_rowid: i64,
    pub guide_rowid: Option<i64>,
    pub name: &'a str,
    pub description: &'a str,
    pub price: i64,
    pub location: &'a str,
    pub date: i64,
    pub status: i16,
    pub max_group_size: i64,
}

#[derive(Queryable)]
pub struct TourRow {
    pub rowid: i64,
    pub id: String,
    pub org_rowid: i64,
    pub guide_rowid: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub location: String,
    pub date: i64,
    pub status: i16,
    pub max_group_size: i64,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = tour_itinerary_stop)]
pub struct TourItineraryStop {
    pub parent_rowid: i64,
    pub sequence: i16,
    pub title: String,
    pub location: String,
    pub duration_minutes: i32,
    pub description: String,
    pub time: String,
}

#[derive(Insertable)]
#[diesel(table_name = tour_tag)]
pub struct NewTourTag<'a> {
    pub parent_rowid: i64,
    pub tag: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = tour_language)]
pub struct NewTourLanguage<'a> {
    pub parent_rowid: i64,
    pub language: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = tour_inclusion)]
pub struct NewTourInclusion<'a> {
    pub parent_rowid: i64,
    pub inclusion: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = previous_tours)]
pub struct NewPreviousTour<'a> {
    pub id: &'a str,
    pub org_rowid: i64,
    pub guide_rowid: i64,
    pub tour_name: &'a str,
    pub tour_location: &'a str,
    pub tour_date: i64,
    pub completed_at: i64,
    pub avg_feedback_rating: Option<f64>,
    pub total_travelers: i64,
}

#[derive(Queryable)]
pub struct PreviousTourRow {
    pub rowid: i64,
    pub id: String,
    pub org_rowid: i64,
    pub guide_rowid: i64,
    pub tour_name: String,
    pub tour_location: String,
    pub tour_date: i64,
    pub completed_at: i64,
    pub avg_feedback_rating: Option<f64>,
    pub total_travelers: i64,
}

#[derive(Insertable)]
#[diesel(table_name = previous_tour_feedback)]
pub struct NewPreviousTourFeedback<'a> {
    pub id: &'a str,
    pub parent_rowid: i64,
    pub author_rowid: i64,
    pub rating: i16,
    pub text: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct PreviousTourFeedbackRow {
    pub rowid: i64,
    pub id: String,
    pub parent_rowid: i64,
    pub author_rowid: i64,
    pub rating: i16,
    pub text: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = guide_performance_review)]
pub struct NewGuidePerformanceReview<'a> {
    pub id: &'a str,
    pub previous_tour_rowid: i64,
    pub guide_rowid: i64,
    pub summary: &'a str,
    pub improvements: &'a str,
    pub sentiment_score: i16,
    pub rating: f64,
    pub red_flags: i16,
    pub tour_name: &'a str,
    pub tour_location: &'a str,
    pub tour_date: i64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct GuidePerformanceReviewRow {
    pub rowid: i64,
    pub id: String,
    pub previous_tour_rowid: i64,
    pub guide_rowid: i64,
    pub summary: String,
    pub improvements: String,
    pub sentiment_score: i16,
    pub rating: f64,
    pub red_flags: i16,
    pub tour_name: String,
    pub tour_location: String,
    pub tour_date: i64,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = guide_performance_review_strength)]
pub struct NewGuidePerformanceReviewStrength<'a> {
    pub parent_rowid: i64,
    pub strength: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = leave_request)]
pub struct NewLeaveRequest<'a> {
    pub id: &'a str,
    pub tour_rowid: i64,
    pub guide_rowid: i64,
    pub reason: &'a str,
    pub status: i16,
    pub organization_response: Option<&'a str>,
    pub criticism_severity: Option<i16>,
    pub criticism_reason: Option<&'a str>,
    pub created_at: i64,
    pub reviewed_at: Option<i64>,
}

#[derive(Queryable)]
pub struct LeaveRequestRow {
    pub rowid: i64,
    pub id: String,
    pub tour_rowid: i64,
    pub guide_rowid: i64,
    pub reason: String,
    pub status: i16,
    pub organization_response: Option<String>,
    pub criticism_severity: Option<i16>,
    pub criticism_reason: Option<String>,
    pub created_at: i64,
    pub reviewed_at: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = peer_review)]
pub struct NewPeerReview<'a> {
    pub id: &'a str,
    pub author_rowid: i64,
    pub subject_rowid: i64,
    pub rating: i16,
    pub text: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct PeerReviewRow {
    pub rowid: i64,
    pub id: String,
    pub author_rowid: i64,
    pub subject_rowid: i64,
    pub rating: i16,
    pub text: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = tour_review)]
pub struct NewTourReview<'a> {
    pub id: &'a str,
    pub author_rowid: i64,
    pub tour_rowid: i64,
    pub rating: i16,
    pub text: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct TourReviewRow {
    pub rowid: i64,
    pub id: String,
    pub author_rowid: i64,
    pub tour_rowid: i64,
    pub rating: i16,
    pub text: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = posts)]
pub struct NewPost<'a> {
    pub id: &'a str,
    pub author_rowid: i64,
    pub body: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct PostRow {
    pub rowid: i64,
    pub id: String,
    pub author_rowid: i64,
    pub body: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = post_comment)]
pub struct NewPostComment<'a> {
    pub id: &'a str,
    pub post_rowid: i64,
    pub author_rowid: i64,
    pub text: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct PostCommentRow {
    pub rowid: i64,
    pub id: String,
    pub post_rowid: i64,
    pub author_rowid: i64,
    pub text: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = post_like)]
pub struct NewPostLike {
    pub post_rowid: i64,
    pub user_rowid: i64,
}
