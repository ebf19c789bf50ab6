use serde::{Deserialize, Serialize};

use crate::shared::application::Notice;

pub const SIGN_IN_TO_FAVORITE: &str = "يرجى تسجيل الدخول أولاً لإضافة المانجا للمفضلة";

/// Outcome of the heart button on a title page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteToggle {
    pub manga_id: String,
    pub is_favorite: bool,
    pub notice: Notice,
}

impl FavoriteToggle {
    pub fn new(manga_id: impl Into<String>, is_favorite: bool) -> Self {
        let notice = if is_favorite {
            Notice::info("تم الإضافة للمفضلة", "تم إضافة المانجا إلى قائمة المفضلة")
        } else {
            Notice::info("تم الحذف من المفضلة", "تم حذف المانجا من قائمة المفضلة")
        };

        Self {
            manga_id: manga_id.into(),
            is_favorite,
            notice,
        }
    }
}

/// Outcome of the remove buttons on the favourites page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRemoval {
    pub removed: usize,
    pub notice: Notice,
}

impl FavoriteRemoval {
    pub fn single(title: &str) -> Self {
        Self {
            removed: 1,
            notice: Notice::info(
                "تم الحذف من المفضلة",
                format!("تم حذف \"{}\" من قائمة المفضلة", title),
            ),
        }
    }

    pub fn all(removed: usize) -> Self {
        Self {
            removed,
            notice: Notice::info(
                "تم مسح جميع المفضلات",
                "تم حذف جميع المانجا من قائمة المفضلة",
            ),
        }
    }
}
