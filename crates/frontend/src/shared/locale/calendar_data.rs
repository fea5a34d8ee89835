//! Bundled calendar names for the locales the picker can render natively.
//!
//! Weekday arrays are Sunday-first.

/// Month and weekday names of one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct CalendarData {
    /// Canonical tag of the entry
    pub code: &'static str,
    /// Normalised (lowercase) tags served by this entry
    pub tags: &'static [&'static str],
    pub months_wide: [&'static str; 12],
    pub months_abbreviated: [&'static str; 12],
    pub weekdays_wide: [&'static str; 7],
    pub weekdays_abbreviated: [&'static str; 7],
    /// Column headers of the calendar grid
    pub weekdays_min: [&'static str; 7],
    /// Picker pattern of the calendar header (`MMMM yyyy`)
    pub month_year_pattern: &'static str,
}

const ENGLISH: CalendarData = CalendarData {
    code: "en-US",
    tags: &["en-us", "en"],
    months_wide: [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ],
    months_abbreviated: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays_wide: [
        "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    ],
    weekdays_abbreviated: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    weekdays_min: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    month_year_pattern: "MMMM yyyy",
};

/// Default calendar names
pub static EN_US: CalendarData = ENGLISH;

static EN_GB: CalendarData = CalendarData {
    code: "en-GB",
    tags: &["en-gb"],
    ..ENGLISH
};

static DE: CalendarData = CalendarData {
    code: "de",
    tags: &["de", "de-de", "de-at", "de-ch"],
    months_wide: [
        "Januar", "Februar", "März", "April", "Mai", "Juni",
        "Juli", "August", "September", "Oktober", "November", "Dezember",
    ],
    months_abbreviated: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.", "Nov.", "Dez.",
    ],
    weekdays_wide: [
        "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
    ],
    weekdays_abbreviated: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    weekdays_min: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    month_year_pattern: "MMMM yyyy",
};

static FR: CalendarData = CalendarData {
    code: "fr",
    tags: &["fr", "fr-fr", "fr-be", "fr-ch", "fr-ca"],
    months_wide: [
        "janvier", "février", "mars", "avril", "mai", "juin",
        "juillet", "août", "septembre", "octobre", "novembre", "décembre",
    ],
    months_abbreviated: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    weekdays_wide: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    weekdays_abbreviated: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    weekdays_min: ["di", "lu", "ma", "me", "je", "ve", "sa"],
    month_year_pattern: "MMMM yyyy",
};

static ES: CalendarData = CalendarData {
    code: "es",
    tags: &["es", "es-es", "es-mx"],
    months_wide: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio",
        "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
    ],
    months_abbreviated: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    weekdays_wide: [
        "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
    ],
    weekdays_abbreviated: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
    weekdays_min: ["do", "lu", "ma", "mi", "ju", "vi", "sá"],
    month_year_pattern: "MMMM yyyy",
};

static IT: CalendarData = CalendarData {
    code: "it",
    tags: &["it", "it-it", "it-ch"],
    months_wide: [
        "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno",
        "luglio", "agosto", "settembre", "ottobre", "novembre", "dicembre",
    ],
    months_abbreviated: [
        "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
    ],
    weekdays_wide: [
        "domenica", "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato",
    ],
    weekdays_abbreviated: ["dom", "lun", "mar", "mer", "gio", "ven", "sab"],
    weekdays_min: ["do", "lu", "ma", "me", "gi", "ve", "sa"],
    month_year_pattern: "MMMM yyyy",
};

static PT_BR: CalendarData = CalendarData {
    code: "pt-BR",
    tags: &["pt-br", "pt"],
    months_wide: [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho",
        "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
    ],
    months_abbreviated: [
        "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
    ],
    weekdays_wide: [
        "domingo", "segunda-feira", "terça-feira", "quarta-feira", "quinta-feira", "sexta-feira",
        "sábado",
    ],
    weekdays_abbreviated: ["dom", "seg", "ter", "qua", "qui", "sex", "sáb"],
    weekdays_min: ["do", "2ª", "3ª", "4ª", "5ª", "6ª", "sá"],
    month_year_pattern: "MMMM yyyy",
};

static NL: CalendarData = CalendarData {
    code: "nl",
    tags: &["nl", "nl-nl", "nl-be"],
    months_wide: [
        "januari", "februari", "maart", "april", "mei", "juni",
        "juli", "augustus", "september", "oktober", "november", "december",
    ],
    months_abbreviated: [
        "jan.", "feb.", "mrt.", "apr.", "mei", "jun.", "jul.", "aug.", "sep.", "okt.", "nov.",
        "dec.",
    ],
    weekdays_wide: [
        "zondag", "maandag", "dinsdag", "woensdag", "donderdag", "vrijdag", "zaterdag",
    ],
    weekdays_abbreviated: ["zo", "ma", "di", "wo", "do", "vr", "za"],
    weekdays_min: ["zo", "ma", "di", "wo", "do", "vr", "za"],
    month_year_pattern: "MMMM yyyy",
};

static RU: CalendarData = CalendarData {
    code: "ru",
    tags: &["ru", "ru-ru"],
    months_wide: [
        "январь", "февраль", "март", "апрель", "май", "июнь",
        "июль", "август", "сентябрь", "октябрь", "ноябрь", "декабрь",
    ],
    months_abbreviated: [
        "янв.", "февр.", "март", "апр.", "май", "июнь", "июль", "авг.", "сент.", "окт.", "нояб.",
        "дек.",
    ],
    weekdays_wide: [
        "воскресенье", "понедельник", "вторник", "среда", "четверг", "пятница", "суббота",
    ],
    weekdays_abbreviated: ["вс", "пн", "вт", "ср", "чт", "пт", "сб"],
    weekdays_min: ["вс", "пн", "вт", "ср", "чт", "пт", "сб"],
    month_year_pattern: "LLLL yyyy",
};

static PL: CalendarData = CalendarData {
    code: "pl",
    tags: &["pl", "pl-pl"],
    months_wide: [
        "styczeń", "luty", "marzec", "kwiecień", "maj", "czerwiec",
        "lipiec", "sierpień", "wrzesień", "październik", "listopad", "grudzień",
    ],
    months_abbreviated: [
        "sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paź", "lis", "gru",
    ],
    weekdays_wide: [
        "niedziela", "poniedziałek", "wtorek", "środa", "czwartek", "piątek", "sobota",
    ],
    weekdays_abbreviated: ["niedz.", "pon.", "wt.", "śr.", "czw.", "pt.", "sob."],
    weekdays_min: ["nd", "pn", "wt", "śr", "cz", "pt", "so"],
    month_year_pattern: "LLLL yyyy",
};

static JA: CalendarData = CalendarData {
    code: "ja",
    tags: &["ja", "ja-jp"],
    months_wide: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    months_abbreviated: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    weekdays_wide: [
        "日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日",
    ],
    weekdays_abbreviated: ["日", "月", "火", "水", "木", "金", "土"],
    weekdays_min: ["日", "月", "火", "水", "木", "金", "土"],
    month_year_pattern: "yyyy年M月",
};

static ZH_CN: CalendarData = CalendarData {
    code: "zh-CN",
    tags: &["zh-cn", "zh", "zh-hans"],
    months_wide: [
        "一月", "二月", "三月", "四月", "五月", "六月",
        "七月", "八月", "九月", "十月", "十一月", "十二月",
    ],
    months_abbreviated: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    weekdays_wide: [
        "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
    ],
    weekdays_abbreviated: ["周日", "周一", "周二", "周三", "周四", "周五", "周六"],
    weekdays_min: ["日", "一", "二", "三", "四", "五", "六"],
    month_year_pattern: "yyyy年M月",
};

static KO: CalendarData = CalendarData {
    code: "ko",
    tags: &["ko", "ko-kr"],
    months_wide: [
        "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
    ],
    months_abbreviated: [
        "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
    ],
    weekdays_wide: [
        "일요일", "월요일", "화요일", "수요일", "목요일", "금요일", "토요일",
    ],
    weekdays_abbreviated: ["일", "월", "화", "수", "목", "금", "토"],
    weekdays_min: ["일", "월", "화", "수", "목", "금", "토"],
    month_year_pattern: "yyyy년 M월",
};

static TABLE: [&CalendarData; 13] = [
    &EN_US, &EN_GB, &DE, &FR, &ES, &IT, &PT_BR, &NL, &RU, &PL, &JA, &ZH_CN, &KO,
];

/// Look up the calendar names for a locale tag.
///
/// Matching is exact after normalisation (`_` becomes `-`, ASCII lowercase).
pub fn lookup(tag: &str) -> Option<&'static CalendarData> {
    let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
    TABLE
        .iter()
        .copied()
        .find(|data| data.tags.contains(&normalized.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_normalizes_tag() {
        assert_eq!(lookup("ja").map(|d| d.code), Some("ja"));
        assert_eq!(lookup("JA_jp").map(|d| d.code), Some("ja"));
        assert_eq!(lookup(" de-AT ").map(|d| d.code), Some("de"));
        assert_eq!(lookup("en-GB").map(|d| d.code), Some("en-GB"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("xx").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("sv-SE").is_none());
    }

    #[test]
    fn test_en_gb_shares_english_names() {
        let gb = lookup("en-gb").unwrap();
        assert_eq!(gb.months_wide, EN_US.months_wide);
        assert_eq!(gb.weekdays_min[0], "Su");
    }
}
