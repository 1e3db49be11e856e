///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        email -> Text,
        display_name -> Text,
        role -> SmallInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Organizations
///////////////////////////////////////////////////////////////////////

table! {
    organizations (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_rowid -> BigInt,
        name -> Text,
        tax_id -> BigInt,
        website -> Nullable<Text>,
        slogan -> Nullable<Text>,
    }
}

joinable!(organizations -> users (user_rowid));

///////////////////////////////////////////////////////////////////////
// Guides
///////////////////////////////////////////////////////////////////////

table! {
    tour_guide (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_rowid -> BigInt,
        school -> Text,
        description -> Text,
        cv_url -> Nullable<Text>,
        avg_rating -> Nullable<Double>,
        total_reviews -> BigInt,
        rating_penalty -> Double,
    }
}

joinable!(tour_guide -> users (user_rowid));

table! {
    tour_guide_certificate (parent_rowid, certificate) {
        parent_rowid -> BigInt,
        certificate -> Text,
    }
}

joinable!(tour_guide_certificate -> tour_guide (parent_rowid));

table! {
    tour_guide_work_experience (parent_rowid, experience) {
        parent_rowid -> BigInt,
        experience -> Text,
    }
}

joinable!(tour_guide_work_experience -> tour_guide (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Tours
///////////////////////////////////////////////////////////////////////

table! {
    tours (rowid) {
        rowid -> BigInt,
        id -> Text,
        org_rowid -> BigInt,
        guide_rowid -> Nullable<BigInt>,
        name -> Text,
        description -> Text,
        price -> BigInt,
        location -> Text,
        date -> BigInt,
        status -> SmallInt,
        max_group_size -> BigInt,
    }
}

joinable!(tours -> organizations (org_rowid));
joinable!(tours -> tour_guide (guide_rowid));

table! {
    tour_itinerary_stop (parent_rowid, sequence) {
        parent_rowid -> BigInt,
        sequence -> SmallInt,
        title -> Text,
        location -> Text,
        duration_minutes -> Integer,
        description -> Text,
        time -> Text,
    }
}

joinable!(tour_itinerary_stop -> tours (parent_rowid));

table! {
    tour_tag (parent_rowid, tag) {
        parent_rowid -> BigInt,
        tag -> Text,
    }
}

joinable!(tour_tag -> tours (parent_rowid));

table! {
    tour_language (parent_rowid, language) {
        parent_rowid -> BigInt,
        language -> Text,
    }
}

joinable!(tour_language -> tours (parent_rowid));

table! {
    tour_inclusion (parent_rowid, inclusion) {
        parent_rowid -> BigInt,
        inclusion -> Text,
    }
}

joinable!(tour_inclusion -> tours (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Previous tours & feedback
///////////////////////////////////////////////////////////////////////

table! {
    previous_tours (rowid) {
        rowid -> BigInt,
        id -> Text,
        org_rowid -> BigInt,
        guide_rowid -> BigInt,
        tour_name -> Text,
        tour_location -> Text,
        tour_date -> BigInt,
        completed_at -> BigInt,
        avg_feedback_rating -> Nullable<Double>,
        total_travelers -> BigInt,
    }
}

joinable!(previous_tours -> organizations (org_rowid));
joinable!(previous_tours -> tour_guide (guide_rowid));

table! {
    previous_tour_feedback (rowid) {
        rowid -> BigInt,
        id -> Text,
        parent_rowid -> BigInt,
        author_rowid -> BigInt,
        rating -> SmallInt,
        text -> Text,
        created_at -> BigInt,
    }
}

joinable!(previous_tour_feedback -> previous_tours (parent_rowid));
joinable!(previous_tour_feedback -> users (author_rowid));

///////////////////////////////////////////////////////////////////////
// Performance reviews
///////////////////////////////////////////////////////////////////////

table! {
    guide_performance_review (rowid) {
        rowid -> BigInt,
        id -> Text,
        previous_tour_rowid -> BigInt,
        guide_rowid -> BigInt,
        summary -> Text,
        improvements -> Text,
        sentiment_score -> SmallInt,
        rating -> Double,
        red_flags -> SmallInt,
        tour_name -> Text,
        tour_location -> Text,
        tour_date -> BigInt,
        created_at -> BigInt,
    }
}

joinable!(guide_performance_review -> previous_tours (previous_tour_rowid));
joinable!(guide_performance_review -> tour_guide (guide_rowid));

table! {
    guide_performance_review_strength (parent_rowid, strength) {
        parent_rowid -> BigInt,
        strength -> Text,
    }
}

joinable!(guide_performance_review_strength -> guide_performance_review (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Leave requests
///////////////////////////////////////////////////////////////////////

table! {
    leave_request (rowid) {
        rowid -> BigInt,
        id -> Text,
        tour_rowid -> BigInt,
        guide_rowid -> BigInt,
        reason -> Text,
        status -> SmallInt,
        organization_response -> Nullable<Text>,
        criticism_severity -> Nullable<SmallInt>,
        criticism_reason -> Nullable<Text>,
        created_at -> BigInt,
        reviewed_at -> Nullable<BigInt>,
    }
}

joinable!(leave_request -> tours (tour_rowid));
joinable!(leave_request -> tour_guide (guide_rowid));

///////////////////////////////////////////////////////////////////////
// Reviews
///////////////////////////////////////////////////////////////////////

table! {
    peer_review (rowid) {
        rowid -> BigInt,
        id -> Text,
        author_rowid -> BigInt,
        subject_rowid -> BigInt,
        rating -> SmallInt,
        text -> Text,
        created_at -> BigInt,
    }
}

table! {
    tour_review (rowid) {
        rowid -> BigInt,
        id -> Text,
        author_rowid -> BigInt,
        tour_rowid -> BigInt,
        rating -> SmallInt,
        text -> Text,
        created_at -> BigInt,
    }
}

joinable!(tour_review -> tours (tour_rowid));
joinable!(tour_review -> users (author_rowid));

///////////////////////////////////////////////////////////////////////
// Social feed
///////////////////////////////////////////////////////////////////////

table! {
    posts (rowid) {
        rowid -> BigInt,
        id -> Text,
        author_rowid -> BigInt,
        body -> Text,
        created_at -> BigInt,
    }
}

joinable!(posts -> users (author_rowid));

table! {
    post_comment (rowid) {
        rowid -> BigInt,
        id -> Text,
        post_rowid -> BigInt,
        author_rowid -> BigInt,
        text -> Text,
        created_at -> BigInt,
    }
}

joinable!(post_comment -> posts (post_rowid));
joinable!(post_comment -> users (author_rowid));

table! {
    post_like (post_rowid, user_rowid) {
        post_rowid -> BigInt,
        user_rowid -> BigInt,
    }
}

joinable!(post_like -> posts (post_rowid));
joinable!(post_like -> users (user_rowid));

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    users,
    organizations,
    tour_guide,
    tour_guide_certificate,
    tour_guide_work_experience,
    tours,
    tour_itinerary_stop,
    tour_tag,
    tour_language,
    tour_inclusion,
    previous_tours,
    previous_tour_feedback,
    guide_performance_review,
    guide_performance_review_strength,
    leave_request,
    peer_review,
    tour_review,
    posts,
    post_comment,
    post_like,
);
