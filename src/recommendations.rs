//! Rider advisory rule table.
//!
//! Pure, total function from a weather reading to an ordered list of advisory
//! strings. Blocks are evaluated independently and concatenated in a fixed order:
//! temperature, sky condition, wind, humidity, then the seasonal block driven by
//! the evaluation date. Nothing is validated, clamped or deduplicated; the
//! temperature bands are exhaustive, so the result is never empty.

use chrono::NaiveDate;

use crate::forecast::Season;
use crate::models::Condition;

/// One temperature band: fires when the temperature is below `below`
/// (the last band has no bound and catches everything else).
struct TemperatureBand {
    below: Option<f64>,
    items: &'static [&'static str],
}

// Bands are ordered by ascending upper bound and checked in order, which makes
// them half-open on the upper side: 5.0 falls into the [5,10) band.
const TEMPERATURE_BANDS: &[TemperatureBand] = &[
    TemperatureBand {
        below: Some(0.0),
        items: &[
            "🥶 Température négative : équipement grand froid obligatoire",
            "🧤 Gants chauffants ou sous-gants recommandés",
            "👟 Couvre-chaussures étanches et isolants",
            "🫁 Échauffement prolongé en intérieur",
            "💧 Bidon isotherme pour éviter le gel",
        ],
    },
    TemperatureBand {
        below: Some(5.0),
        items: &[
            "🧥 Prévoir des vêtements chauds et coupe-vent",
            "🧤 Gants et bonnet recommandés",
            "☕ Boisson chaude avant le départ",
            "🦵 Collant long obligatoire",
            "🔥 Échauffement en salle recommandé",
        ],
    },
    TemperatureBand {
        below: Some(10.0),
        items: &[
            "🧥 Veste thermique ou multicouches",
            "🦵 Collant ou jambières selon la durée",
            "🧤 Gants fins recommandés",
            "☕ Boisson tiède dans le bidon",
        ],
    },
    TemperatureBand {
        below: Some(15.0),
        items: &[
            "🧥 Veste légère ou gilet coupe-vent",
            "🦵 Cuissard long ou jambières amovibles",
            "👕 Maillot manches longues ou bras amovibles",
        ],
    },
    TemperatureBand {
        below: Some(20.0),
        items: &[
            "👕 Conditions idéales : maillot manches courtes",
            "🦵 Cuissard court suffisant",
            "🧥 Gilet léger en cas de vent",
        ],
    },
    TemperatureBand {
        below: Some(25.0),
        items: &[
            "👕 Maillot technique respirant",
            "💧 Hydratation normale (500ml/h)",
            "🧴 Crème solaire conseillée",
        ],
    },
    TemperatureBand {
        below: Some(30.0),
        items: &[
            "💧 Augmenter l'hydratation (750ml/h)",
            "🧴 Crème solaire indispensable",
            "👕 Vêtements clairs et ultra-respirants",
            "🧢 Casquette ou bandana sous le casque",
            "🧊 Glaçons dans le bidon si possible",
        ],
    },
    TemperatureBand {
        below: None,
        items: &[
            "🔥 Chaleur extrême : course déconseillée aux heures chaudes",
            "💧 Hydratation maximale (1L/h minimum)",
            "🧴 Renouveler la crème solaire toutes les 2h",
            "👕 Vêtements blancs ou très clairs obligatoires",
            "🧢 Protection tête renforcée",
            "❄️ Serviette humide sur la nuque aux arrêts",
            "⏰ Départ très matinal recommandé",
        ],
    },
];

/// Threshold rule: fires when the measured value is strictly above `above`.
/// Rules are listed highest first and at most one fires.
struct ThresholdRule {
    above: f64,
    items: &'static [&'static str],
}

const WIND_RULES: &[ThresholdRule] = &[
    ThresholdRule {
        above: 40.0,
        items: &[
            "🌪️ Vent très fort : course potentiellement dangereuse",
            "🚴 Éviter les roues hautes et disques",
            "👥 Rouler impérativement en groupe",
            "🛣️ Attention aux rafales latérales",
        ],
    },
    ThresholdRule {
        above: 30.0,
        items: &[
            "💨 Vent fort : adapter la stratégie de course",
            "🚴 Privilégier le peloton pour s'abriter",
            "⚖️ Braquet plus souple face au vent",
        ],
    },
    ThresholdRule {
        above: 20.0,
        items: &[
            "💨 Vent modéré : position aérodynamique",
            "🚴 Roues moyennes recommandées",
        ],
    },
];

const HUMIDITY_RULES: &[ThresholdRule] = &[
    ThresholdRule {
        above: 90.0,
        items: &[
            "💦 Humidité extrême : risque de surchauffe",
            "👕 Vêtements ultra-respirants obligatoires",
            "💧 Hydratation renforcée même par temps frais",
            "🧊 Refroidissement corporel aux ravitaillements",
        ],
    },
    ThresholdRule {
        above: 80.0,
        items: &[
            "💦 Humidité élevée : hydratation régulière",
            "👕 Vêtements techniques anti-transpiration",
            "🧴 Éviter les crèmes trop grasses",
        ],
    },
];

const WINTER_SEASON_ITEMS: &[&str] = &[
    "❄️ Saison hivernale : échauffement prolongé",
    "🔋 Vérifier l'autonomie des éclairages",
];

const SUMMER_SEASON_ITEMS: &[&str] = &[
    "☀️ Saison estivale : départ matinal conseillé",
    "🧴 Renouveler la protection solaire",
];

fn temperature_items(temperature_c: f64) -> &'static [&'static str] {
    for band in TEMPERATURE_BANDS {
        match band.below {
            Some(max) if temperature_c >= max => continue,
            _ => return band.items,
        }
    }
    &[]
}

fn condition_items(condition: Condition) -> &'static [&'static str] {
    match condition {
        Condition::Rainy => &[
            "🌧️ K-way ou veste imperméable obligatoire",
            "👓 Lunettes avec traitement anti-buée",
            "🚴 Pneus avec bonne adhérence sur mouillé",
            "🔦 Éclairage renforcé pour la visibilité",
            "🧤 Gants étanches recommandés",
            "👟 Couvre-chaussures imperméables",
            "📱 Protection étanche pour électronique",
            "🛣️ Réduire la vitesse en virage et descente",
        ],
        Condition::Stormy => &[
            "⛈️ DANGER : vérifier si la course est maintenue",
            "🌧️ Équipement pluie complet obligatoire",
            "📱 Téléphone étanche ou protection renforcée",
            "🚫 Éviter les zones exposées et les arbres",
            "🏠 Abri d'urgence identifié sur le parcours",
        ],
        Condition::Foggy => &[
            "🌫️ Éclairage avant/arrière obligatoire",
            "👕 Vêtements haute visibilité",
            "🚴 Réduire la vitesse en descente",
            "📢 Signaler sa présence vocalement",
            "👥 Rester groupé si possible",
        ],
        Condition::Windy => &[
            "💨 Position plus aérodynamique",
            "🚴 Roues pleines déconseillées",
            "👥 Privilégier le peloton pour s'abriter",
            "⚖️ Adapter le braquet aux conditions",
        ],
        Condition::Sunny => &[
            "😎 Lunettes de soleil obligatoires",
            "🧴 Crème solaire toutes les zones exposées",
            "💧 Hydratation préventive avant le départ",
        ],
        Condition::Cloudy => &[],
    }
}

fn threshold_items(value: f64, rules: &'static [ThresholdRule]) -> &'static [&'static str] {
    rules
        .iter()
        .find(|rule| value > rule.above)
        .map_or(&[], |rule| rule.items)
}

fn seasonal_items(today: NaiveDate) -> &'static [&'static str] {
    match Season::for_date(today) {
        Season::Winter => WINTER_SEASON_ITEMS,
        Season::Summer => SUMMER_SEASON_ITEMS,
        Season::Shoulder => &[],
    }
}

/// Build the ordered advisory list for one set of race-day conditions.
///
/// `today` is the evaluation date, not the race date: the closing seasonal block
/// reflects the season the rider is preparing in, independently of when the race
/// takes place.
#[must_use]
pub fn for_conditions(
    temperature_c: f64,
    condition: Condition,
    wind_speed_kmh: f64,
    humidity_pct: f64,
    today: NaiveDate,
) -> Vec<String> {
    let blocks: [&'static [&'static str]; 5] = [
        temperature_items(temperature_c),
        condition_items(condition),
        threshold_items(wind_speed_kmh, WIND_RULES),
        threshold_items(humidity_pct, HUMIDITY_RULES),
        seasonal_items(today),
    ];

    blocks
        .iter()
        .flat_map(|items| items.iter())
        .map(|item| (*item).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // A date in a shoulder month keeps the seasonal block out of the way.
    fn april() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()
    }

    fn december() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, 15).unwrap()
    }

    fn july() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, 15).unwrap()
    }

    #[rstest]
    #[case(-10.0, 5, "🥶 Température négative : équipement grand froid obligatoire")]
    #[case(-0.1, 5, "🥶 Température négative : équipement grand froid obligatoire")]
    #[case(0.0, 5, "🧥 Prévoir des vêtements chauds et coupe-vent")]
    #[case(4.9, 5, "🧥 Prévoir des vêtements chauds et coupe-vent")]
    #[case(5.0, 4, "🧥 Veste thermique ou multicouches")]
    #[case(10.0, 3, "🧥 Veste légère ou gilet coupe-vent")]
    #[case(15.0, 3, "👕 Conditions idéales : maillot manches courtes")]
    #[case(20.0, 3, "👕 Maillot technique respirant")]
    #[case(25.0, 5, "💧 Augmenter l'hydratation (750ml/h)")]
    #[case(30.0, 7, "🔥 Chaleur extrême : course déconseillée aux heures chaudes")]
    #[case(45.0, 7, "🔥 Chaleur extrême : course déconseillée aux heures chaudes")]
    fn temperature_band_boundaries(
        #[case] temperature: f64,
        #[case] expected_count: usize,
        #[case] first_item: &str,
    ) {
        let items = temperature_items(temperature);
        assert_eq!(items.len(), expected_count);
        assert_eq!(items[0], first_item);
    }

    #[test]
    fn temperature_bands_are_exhaustive_and_exclusive() {
        // Sweep a wide range in 0.5° steps: exactly one band fires everywhere,
        // so the advisory list is never empty.
        let mut t = -40.0f64;
        while t <= 55.0 {
            let recs = for_conditions(t, Condition::Cloudy, 0.0, 0.0, april());
            assert!(!recs.is_empty(), "no temperature band fired for {t}");
            t += 0.5;
        }
    }

    #[rstest]
    #[case(Condition::Rainy, 8)]
    #[case(Condition::Stormy, 5)]
    #[case(Condition::Foggy, 5)]
    #[case(Condition::Windy, 4)]
    #[case(Condition::Sunny, 3)]
    #[case(Condition::Cloudy, 0)]
    fn condition_block_counts(#[case] condition: Condition, #[case] expected: usize) {
        assert_eq!(condition_items(condition).len(), expected);
    }

    #[rstest]
    #[case(41.0, 4)]
    #[case(40.0, 3)] // exactly 40 is not "above 40"
    #[case(35.0, 3)]
    #[case(30.0, 2)]
    #[case(25.0, 2)]
    #[case(20.0, 0)]
    #[case(15.0, 0)]
    fn wind_thresholds_highest_wins(#[case] wind: f64, #[case] expected: usize) {
        assert_eq!(threshold_items(wind, WIND_RULES).len(), expected);
    }

    #[test]
    fn extreme_wind_does_not_stack_lower_blocks() {
        let items = threshold_items(41.0, WIND_RULES);
        assert_eq!(items.len(), 4);
        assert!(items[0].contains("Vent très fort"));
        assert!(!items.iter().any(|i| i.contains("Vent fort :")));
    }

    #[rstest]
    #[case(95.0, 4)]
    #[case(90.0, 3)]
    #[case(85.0, 3)]
    #[case(80.0, 0)]
    #[case(50.0, 0)]
    fn humidity_thresholds(#[case] humidity: f64, #[case] expected: usize) {
        assert_eq!(threshold_items(humidity, HUMIDITY_RULES).len(), expected);
    }

    #[test]
    fn mild_spring_sunny_ride_yields_six_items() {
        let recs = for_conditions(22.0, Condition::Sunny, 10.0, 50.0, april());
        assert_eq!(recs.len(), 6);
        // Temperature block first, condition block second.
        assert_eq!(recs[0], "👕 Maillot technique respirant");
        assert_eq!(recs[3], "😎 Lunettes de soleil obligatoires");
    }

    #[test]
    fn freezing_storm_in_december_yields_twenty_items() {
        let recs = for_conditions(-3.0, Condition::Stormy, 45.0, 95.0, december());
        assert_eq!(recs.len(), 20); // 5 cold + 5 storm + 4 wind + 4 humidity + 2 winter
        assert!(recs[0].contains("Température négative"));
        assert!(recs[5].contains("DANGER"));
        assert!(recs[10].contains("Vent très fort"));
        assert!(recs[14].contains("Humidité extrême"));
        assert!(recs[18].contains("Saison hivernale"));
    }

    #[test]
    fn seasonal_block_follows_evaluation_date_not_race_conditions() {
        // Summer-like reading, but evaluated in December: the winter seasonal
        // items still close the list.
        let recs = for_conditions(28.0, Condition::Sunny, 10.0, 50.0, december());
        assert_eq!(recs.last().unwrap(), WINTER_SEASON_ITEMS[1]);
        assert_eq!(&recs[recs.len() - 2], WINTER_SEASON_ITEMS[0]);

        // Same reading evaluated in July picks up the summer items instead.
        let recs = for_conditions(28.0, Condition::Sunny, 10.0, 50.0, july());
        assert_eq!(recs.last().unwrap(), SUMMER_SEASON_ITEMS[1]);

        // And a shoulder month contributes nothing.
        let recs = for_conditions(28.0, Condition::Sunny, 10.0, 50.0, april());
        assert!(!recs.iter().any(|r| r.contains("Saison")));
    }

    #[test]
    fn overlapping_advice_is_not_deduplicated() {
        // Cold reading evaluated in winter: indoor warm-up advice from the
        // temperature block coexists with the seasonal warm-up item.
        let recs = for_conditions(2.0, Condition::Cloudy, 5.0, 50.0, december());
        assert!(recs.iter().any(|r| r.contains("Échauffement en salle")));
        assert!(recs.iter().any(|r| r.contains("échauffement prolongé")));
    }
}
