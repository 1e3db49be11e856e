use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Guest,
    Traveler,
    Guide,
    Organization,
    Admin,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct User {
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
}

/// Identity assertion from the external auth provider.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Guide {
    pub id: String,
    pub email: String,
    pub school: String,
    pub description: String,
    pub certificates: Vec<String>,
    pub work_experience: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rating: Option<f64>,
    pub total_reviews: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default))]
pub struct NewGuideProfile {
    pub school: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Organization {
    pub id: String,
    pub email: String,
    pub name: String,
    pub tax_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewOrganization {
    pub name: String,
    pub tax_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum TourStatus {
    Draft,
    Current,
    Completed,
    Cancelled,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ItineraryStop {
    pub sequence: u16,
    pub title: String,
    pub location: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub description: String,
    pub time: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Tour {
    pub id: String,
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub location: String,
    pub date: i64,
    pub status: TourStatus,
    pub itinerary: Vec<ItineraryStop>,
    pub tags: Vec<String>,
    pub languages: Vec<String>,
    pub max_group_size: u32,
    pub inclusions: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewTour {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: u64,
    pub location: String,
    pub date: i64,
    #[serde(default)]
    pub itinerary: Vec<ItineraryStop>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub max_group_size: u32,
    #[serde(default)]
    pub inclusions: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AssignGuide {
    pub guide_id: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct CompleteTour {
    pub total_travelers: u32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PreviousTour {
    pub id: String,
    pub organization_id: String,
    pub guide_id: String,
    pub tour_name: String,
    pub tour_location: String,
    pub tour_date: i64,
    pub completed_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_feedback_rating: Option<f64>,
    pub total_travelers: u32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PreviousTourFeedback {
    pub id: String,
    pub previous_tour_id: String,
    pub author_email: String,
    pub rating: i64,
    pub text: String,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewFeedback {
    pub rating: i64,
    pub text: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PerformanceReview {
    pub id: String,
    pub previous_tour_id: String,
    pub guide_id: String,
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: String,
    pub sentiment_score: u8,
    pub rating: f64,
    pub red_flags: bool,
    pub tour_name: String,
    pub tour_location: String,
    pub tour_date: i64,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewPerformanceReview {
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: String,
    pub sentiment_score: i64,
    #[serde(default)]
    pub red_flags: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct InlineImage {
    pub base64_data: String,
    pub media_type: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default))]
pub struct AnalyzeFeedback {
    #[serde(default)]
    pub texts: Vec<String>,
    #[serde(default)]
    pub images: Vec<InlineImage>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct FeedbackAnalysis {
    pub summary: String,
    pub sentiment_score: u8,
    pub strengths: Vec<String>,
    pub improvements: String,
    pub red_flags: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum LeaveRequestStatus {
    Pending,
    Approved,
    Rejected,
    Criticized,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct LeaveRequest {
    pub id: String,
    pub tour_id: String,
    pub guide_id: String,
    pub reason: String,
    pub status: LeaveRequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criticism_severity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criticism_reason: Option<String>,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewLeaveRequest {
    pub tour_id: String,
    pub reason: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default))]
pub struct ApproveLeaveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RejectLeaveRequest {
    pub response: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct CriticizeLeaveRequest {
    pub severity: i64,
    pub reason: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewReview {
    pub rating: i64,
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PeerReview {
    pub id: String,
    pub author_email: String,
    pub subject_email: String,
    pub rating: f64,
    pub text: String,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct TourReview {
    pub id: String,
    pub author_email: String,
    pub tour_id: String,
    pub rating: f64,
    pub text: String,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewPost {
    pub body: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Post {
    pub id: String,
    pub author_email: String,
    pub body: String,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewPostComment {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PostComment {
    pub id: String,
    pub post_id: String,
    pub author_email: String,
    pub text: String,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct LikeState {
    pub liked: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct ResultCount {
    pub count: u64,
}

/// Error response with a machine-readable status, a human-readable
/// message and an optional field -> message map for validation errors.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
}
