//! City catalog models

use serde::{Deserialize, Serialize};

/// A selectable city backed by one archive file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Archive file stem, e.g. `new-york`
    pub id: String,
    pub name: String,
    pub name_ko: String,
    pub country: String,
}

/// Korean display names for the cities shipped with the data set
pub const KOREAN_CITY_NAMES: &[(&str, &str)] = &[
    ("seoul", "서울"),
    ("busan", "부산"),
    ("incheon", "인천"),
    ("daegu", "대구"),
    ("daejeon", "대전"),
    ("gwangju", "광주"),
    ("ulsan", "울산"),
    ("sejong", "세종"),
    ("suwon", "수원"),
    ("goyang", "고양"),
    ("yongin", "용인"),
    ("changwon", "창원"),
    ("seongnam", "성남"),
    ("cheongju", "청주"),
    ("jeonju", "전주"),
    ("pohang", "포항"),
    ("jinju", "진주"),
    ("yeosu", "여수"),
    ("suncheon", "순천"),
    ("jeju", "제주"),
    ("seogwipo", "서귀포"),
    ("chuncheon", "춘천"),
    ("gangneung", "강릉"),
    ("sokcho", "속초"),
    ("wonju", "원주"),
    ("tokyo", "도쿄"),
    ("osaka", "오사카"),
    ("kyoto", "교토"),
    ("fukuoka", "후쿠오카"),
    ("sapporo", "삿포로"),
    ("beijing", "베이징"),
    ("shanghai", "상하이"),
    ("hong-kong", "홍콩"),
    ("taipei", "타이페이"),
    ("bangkok", "방콕"),
    ("singapore", "싱가포르"),
    ("kuala-lumpur", "쿠알라룸푸르"),
    ("hanoi", "하노이"),
    ("ho-chi-minh", "호치민"),
    ("bali", "발리"),
    ("phuket", "푸켓"),
    ("cebu", "세부"),
    ("manila", "마닐라"),
    ("paris", "파리"),
    ("london", "런던"),
    ("rome", "로마"),
    ("barcelona", "바르셀로나"),
    ("new-york", "뉴욕"),
    ("los-angeles", "로스앤젤레스"),
    ("san-francisco", "샌프란시스코"),
    ("honolulu", "호놀룰루"),
];

/// Look up the built-in Korean name for a city id
pub fn korean_city_name(city_id: &str) -> Option<&'static str> {
    KOREAN_CITY_NAMES
        .iter()
        .find(|(id, _)| *id == city_id)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_city_has_korean_name() {
        assert_eq!(korean_city_name("seoul"), Some("서울"));
        assert_eq!(korean_city_name("new-york"), Some("뉴욕"));
    }

    #[test]
    fn unknown_city_has_none() {
        assert_eq!(korean_city_name("reykjavik"), None);
    }

    #[test]
    fn serializes_name_ko() {
        let city = City {
            id: "seoul".to_string(),
            name: "Seoul".to_string(),
            name_ko: "서울".to_string(),
            country: "KR".to_string(),
        };
        let json = serde_json::to_value(&city).unwrap();
        assert_eq!(json["nameKo"], "서울");
    }
}
