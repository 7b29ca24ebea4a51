//! Holiday resolution against literal calendars for known years.

use chhankitek::{Chhankitek, GregorianDate, HolidayOccurrence};

fn date(y: u16, m: u8, d: u8) -> GregorianDate {
    GregorianDate::new(y, m, d).unwrap()
}

fn summarize(occurrences: &[HolidayOccurrence]) -> Vec<(String, &'static str, &'static str, bool)> {
    occurrences
        .iter()
        .map(|o| (o.date.to_string(), o.khmer_name, o.english_name, o.is_public))
        .collect()
}

#[test]
fn calendar_2024() {
    let engine = Chhankitek::default();
    let holidays = engine.holidays_for_year(2024).unwrap();

    let expected: Vec<(String, &str, &str, bool)> = [
        ("2024-01-01", "ទិវាចូលឆ្នាំសកល", "International New Year Day", true),
        ("2024-01-07", "ទិវាជ័យជម្នះលើរបបប្រល័យពូជសាសន៍", "Victory over Genocide Day", true),
        ("2024-02-24", "ពិធីបុណ្យមាឃបូជា", "Meak Bochea Day", false),
        ("2024-03-08", "ទិវានារីអន្តរជាតិ", "International Women's Day", true),
        ("2024-04-13", "ពិធីបុណ្យចូលឆ្នាំថ្មីប្រពៃណីជាតិ ថ្ងៃមហាសង្ក្រាន្ត", "Khmer New Year (Maha Songkran)", true),
        ("2024-04-14", "ពិធីបុណ្យចូលឆ្នាំថ្មីប្រពៃណីជាតិ ថ្ងៃវារៈវ័នបត", "Khmer New Year (Virak Vanabat)", true),
        ("2024-04-15", "ពិធីបុណ្យចូលឆ្នាំថ្មីប្រពៃណីជាតិ ថ្ងៃវារៈឡើងស័ក", "Khmer New Year (Virak Loeng Sak)", true),
        ("2024-05-01", "ទិវាពលកម្មអន្តរជាតិ", "International Labour Day", true),
        ("2024-05-14", "ព្រះរាជពិធីបុណ្យចម្រើនព្រះជន្ម ព្រះមហាក្សត្រ", "King's Birthday", true),
        ("2024-05-22", "ពិធីបុណ្យវិសាខបូជា", "Visak Bochea Day", true),
        ("2024-05-26", "ព្រះរាជពិធីច្រត់ព្រះនង្គ័ល", "Royal Ploughing Ceremony", true),
        ("2024-06-01", "ទិវាកុមារអន្តរជាតិ", "International Children's Day", false),
        ("2024-06-18", "ព្រះរាជពិធីបុណ្យចម្រើនព្រះជន្ម សម្តេចព្រះមហាក្សត្រីព្រះវររាជមាតា", "Queen Mother's Birthday", true),
        ("2024-07-21", "ពិធីបុណ្យចូលព្រះវស្សា", "Beginning of Buddhist Lent", false),
        ("2024-09-24", "ទិវាប្រកាសរដ្ឋធម្មនុញ្ញ", "Constitution Day", true),
        ("2024-10-01", "ពិធីបុណ្យភ្ជុំបិណ្ឌ", "Pchum Ben Day", true),
        ("2024-10-02", "ពិធីបុណ្យភ្ជុំបិណ្ឌ", "Pchum Ben Day", true),
        ("2024-10-03", "ពិធីបុណ្យភ្ជុំបិណ្ឌ", "Pchum Ben Day", true),
        ("2024-10-15", "ទិវាប្រារព្ធពិធីគោរពព្រះវិញ្ញាណក្ខន្ធ ព្រះបរមរតនកោដ្ឋ", "King Father's Commemoration Day", true),
        ("2024-10-17", "ពិធីបុណ្យចេញព្រះវស្សា", "End of Buddhist Lent", false),
        ("2024-10-29", "ព្រះរាជពិធីគ្រងព្រះបរមរាជសម្បត្តិ", "King's Coronation Day", true),
        ("2024-11-09", "ពិធីបុណ្យឯករាជ្យជាតិ", "Independence Day", true),
        ("2024-11-14", "ព្រះរាជពិធីបុណ្យអុំទូក បណ្តែតប្រទីប និងសំពះព្រះខែ អកអំបុក", "Water Festival", true),
        ("2024-11-15", "ព្រះរាជពិធីបុណ្យអុំទូក បណ្តែតប្រទីប និងសំពះព្រះខែ អកអំបុក", "Water Festival", true),
        ("2024-11-16", "ព្រះរាជពិធីបុណ្យអុំទូក បណ្តែតប្រទីប និងសំពះព្រះខែ អកអំបុក", "Water Festival", true),
        ("2024-12-29", "ទិវាសន្តិភាពនៅកម្ពុជា", "Peace Day in Cambodia", true),
    ]
    .into_iter()
    .map(|(d, khmer, english, public)| (d.to_string(), khmer, english, public))
    .collect();

    assert_eq!(summarize(&holidays), expected);
}

#[test]
fn resolution_is_deterministic() {
    let engine = Chhankitek::default();
    let first = engine.holidays_for_year(2024).unwrap();
    let second = engine.holidays_for_year(2024).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn ids_are_unique_and_stable() {
    let holidays = Chhankitek::default().holidays_for_year(2024).unwrap();
    let mut ids: Vec<_> = holidays.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids[0], "2024-01-01-0");
    assert_eq!(ids[4], "2024-04-13-12");
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), holidays.len());
}

#[test]
fn buddhist_lent_follows_second_asadh_in_leap_month_years() {
    let engine = Chhankitek::default();
    let lent = |year| -> Vec<GregorianDate> {
        engine
            .holidays_for_year(year)
            .unwrap()
            .into_iter()
            .filter(|o| o.english_name == "Beginning of Buddhist Lent")
            .map(|o| o.date)
            .collect()
    };
    assert_eq!(lent(2023), vec![date(2023, 8, 2)]);
    assert_eq!(lent(2024), vec![date(2024, 7, 21)]);
}

#[test]
fn serialized_occurrence_shape() {
    let holidays = Chhankitek::default().holidays_on(date(2024, 11, 9)).unwrap();
    let json = serde_json::to_value(&holidays).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": "2024-11-09-10",
            "date": "2024-11-09",
            "khmer_name": "ពិធីបុណ្យឯករាជ្យជាតិ",
            "english_name": "Independence Day",
            "is_public": true,
        }])
    );
}

#[test]
fn every_supported_year_resolves() {
    let engine = Chhankitek::default();
    for year in (1900..=2199).step_by(37) {
        let holidays = engine.holidays_for_year(year).unwrap();
        assert!(holidays.len() >= 24, "year {year} has {}", holidays.len());
        assert!(holidays.windows(2).all(|w| w[0].date <= w[1].date));
    }
}
