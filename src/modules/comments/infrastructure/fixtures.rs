use chrono::{DateTime, TimeZone, Utc};

use crate::modules::comments::domain::{Comment, Reply};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Discussion shown on the first title before anyone else has commented
pub fn seed_comments() -> Vec<Comment> {
    vec![Comment {
        id: "comment1".to_string(),
        manga_id: "1".to_string(),
        chapter_id: Some("ch1".to_string()),
        user_id: "user1".to_string(),
        username: "أحمد_المانجا".to_string(),
        content: "فصل رائع جداً! أسلوب الرسم مذهل والقصة مشوقة".to_string(),
        timestamp: at(2025, 1, 15, 10, 30),
        likes: 15,
        replies: vec![Reply {
            id: "reply1".to_string(),
            user_id: "user2".to_string(),
            username: "سارة_أوتاكو".to_string(),
            content: "أتفق معك تماماً، لا أستطيع الانتظار للفصل القادم".to_string(),
            timestamp: at(2025, 1, 15, 11, 0),
            likes: 3,
        }],
    }]
}
