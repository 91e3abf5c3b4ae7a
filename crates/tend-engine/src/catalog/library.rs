//! The built-in observation library.
//!
//! Static catalog data, never mutated at runtime. Texts are deliberately
//! non-judgmental: they describe what the data shows and leave the meaning
//! to the reader. `{habit}` names the single subject habit; `{habitA}` and
//! `{habitB}` name the pair for relationship observations.

use tend_core::types::{
    Observation, ObservationCategory, ObservationConditions, ObservationText, PatternType,
};

const fn conditions(pattern_type: PatternType) -> ObservationConditions {
    ObservationConditions {
        pattern_type,
        min_data_days: None,
        requires_habit: false,
        requires_multi_habit: false,
    }
}

const fn habit_conditions(pattern_type: PatternType) -> ObservationConditions {
    ObservationConditions {
        pattern_type,
        min_data_days: None,
        requires_habit: true,
        requires_multi_habit: false,
    }
}

const fn pair_conditions(pattern_type: PatternType) -> ObservationConditions {
    ObservationConditions {
        pattern_type,
        min_data_days: None,
        requires_habit: false,
        requires_multi_habit: true,
    }
}

const fn general_conditions(min_data_days: u32) -> ObservationConditions {
    ObservationConditions {
        pattern_type: PatternType::General,
        min_data_days: Some(min_data_days),
        requires_habit: false,
        requires_multi_habit: false,
    }
}

pub(crate) static ENTRIES: &[Observation] = &[
    Observation {
        id: "soft-return-noticed",
        category: ObservationCategory::NewBeginning,
        conditions: habit_conditions(PatternType::SoftReturn),
        cooldown_days: 14,
        text: ObservationText {
            en: "After a few quiet days, {habit} appeared again. Beginnings like this often go unnoticed.",
            de: "Nach ein paar stillen Tagen ist {habit} wieder aufgetaucht. Solche Anfänge bleiben oft unbemerkt.",
        },
    },
    Observation {
        id: "soft-return-no-gap-judgment",
        category: ObservationCategory::SelfKindness,
        conditions: habit_conditions(PatternType::SoftReturn),
        cooldown_days: 21,
        text: ObservationText {
            en: "There was a pause before {habit} came back. A pause is part of the rhythm, not a break in it.",
            de: "Vor der Rückkehr von {habit} lag eine Pause. Eine Pause gehört zum Rhythmus, sie unterbricht ihn nicht.",
        },
    },
    Observation {
        id: "multiple-restart-persistence",
        category: ObservationCategory::NewBeginning,
        conditions: habit_conditions(PatternType::MultipleRestart),
        cooldown_days: 21,
        text: ObservationText {
            en: "{habit} has started again several times this month. Coming back is its own kind of steadiness.",
            de: "{habit} hat diesen Monat mehrmals neu begonnen. Wiederkommen ist eine eigene Form von Beständigkeit.",
        },
    },
    Observation {
        id: "restart-rhythm",
        category: ObservationCategory::PauseBreak,
        conditions: habit_conditions(PatternType::MultipleRestart),
        cooldown_days: 28,
        text: ObservationText {
            en: "{habit} seems to move in waves lately — some days on, some days off.",
            de: "{habit} bewegt sich zurzeit in Wellen — mal dabei, mal nicht.",
        },
    },
    Observation {
        id: "same-time-anchor",
        category: ObservationCategory::RhythmTime,
        conditions: habit_conditions(PatternType::SameTime),
        cooldown_days: 14,
        text: ObservationText {
            en: "{habit} tends to happen around the same part of the day.",
            de: "{habit} findet meist zur ähnlichen Tageszeit statt.",
        },
    },
    Observation {
        id: "varied-time-freedom",
        category: ObservationCategory::RhythmTime,
        conditions: habit_conditions(PatternType::VariedTime),
        cooldown_days: 14,
        text: ObservationText {
            en: "{habit} doesn't seem tied to any particular time of day.",
            de: "{habit} scheint an keine bestimmte Tageszeit gebunden zu sein.",
        },
    },
    Observation {
        id: "weekday-weekend-shift",
        category: ObservationCategory::WeekdayCycle,
        conditions: habit_conditions(PatternType::WeekdayWeekendDiff),
        cooldown_days: 14,
        text: ObservationText {
            en: "{habit} looks different on weekends than during the week.",
            de: "{habit} sieht am Wochenende anders aus als unter der Woche.",
        },
    },
    Observation {
        id: "weekday-rhythm-open",
        category: ObservationCategory::WeekdayCycle,
        conditions: habit_conditions(PatternType::WeekdayWeekendDiff),
        cooldown_days: 28,
        text: ObservationText {
            en: "The week and the weekend each seem to carry their own version of {habit}.",
            de: "Die Woche und das Wochenende tragen jeweils ihre eigene Version von {habit}.",
        },
    },
    Observation {
        id: "quiet-consistency-note",
        category: ObservationCategory::QuietRegularity,
        conditions: habit_conditions(PatternType::QuietConsistency),
        cooldown_days: 14,
        text: ObservationText {
            en: "{habit} has been quietly present — a few times, without fuss.",
            de: "{habit} war still da — ein paar Mal, ganz ohne Aufhebens.",
        },
    },
    Observation {
        id: "dense-phases-bursts",
        category: ObservationCategory::QuietRegularity,
        conditions: habit_conditions(PatternType::DensePhases),
        cooldown_days: 21,
        text: ObservationText {
            en: "{habit} shows up in clusters: several days in a row, then space.",
            de: "{habit} zeigt sich in Clustern: mehrere Tage am Stück, dann Raum.",
        },
    },
    Observation {
        id: "conscious-skip-choice",
        category: ObservationCategory::ConsciousPause,
        conditions: habit_conditions(PatternType::ConsciousSkip),
        cooldown_days: 14,
        text: ObservationText {
            en: "You chose to skip {habit} a couple of times. A decision, not an omission.",
            de: "Du hast {habit} ein paar Mal bewusst ausgelassen. Eine Entscheidung, kein Versäumnis.",
        },
    },
    Observation {
        id: "conscious-skip-overall",
        category: ObservationCategory::ConsciousPause,
        conditions: conditions(PatternType::ConsciousSkip),
        cooldown_days: 21,
        text: ObservationText {
            en: "Several conscious skips this period. Saying 'not today' is also a way of paying attention.",
            de: "Mehrere bewusste Pausen in dieser Zeit. 'Heute nicht' zu sagen ist auch eine Form von Aufmerksamkeit.",
        },
    },
    Observation {
        id: "natural-break-present",
        category: ObservationCategory::PauseBreak,
        conditions: habit_conditions(PatternType::NaturalBreak),
        cooldown_days: 14,
        text: ObservationText {
            en: "{habit} has been resting for a few days.",
            de: "{habit} ruht seit ein paar Tagen.",
        },
    },
    Observation {
        id: "break-no-pressure",
        category: ObservationCategory::SelfKindness,
        conditions: habit_conditions(PatternType::NaturalBreak),
        cooldown_days: 28,
        text: ObservationText {
            en: "A few days without {habit}. The record keeps the space open, nothing more.",
            de: "Ein paar Tage ohne {habit}. Die Aufzeichnung hält den Raum offen, mehr nicht.",
        },
    },
    Observation {
        id: "slight-increase-note",
        category: ObservationCategory::ChangeOverTime,
        conditions: habit_conditions(PatternType::SlightIncrease),
        cooldown_days: 14,
        text: ObservationText {
            en: "{habit} appeared a little more often lately than in the weeks before.",
            de: "{habit} tauchte zuletzt etwas häufiger auf als in den Wochen davor.",
        },
    },
    Observation {
        id: "slight-decrease-note",
        category: ObservationCategory::ChangeOverTime,
        conditions: habit_conditions(PatternType::SlightDecrease),
        cooldown_days: 14,
        text: ObservationText {
            en: "{habit} appeared a little less often lately. Rhythms shift.",
            de: "{habit} tauchte zuletzt etwas seltener auf. Rhythmen verschieben sich.",
        },
    },
    Observation {
        id: "effortless-habit",
        category: ObservationCategory::Ease,
        conditions: habit_conditions(PatternType::EffortlessMoment),
        cooldown_days: 14,
        text: ObservationText {
            en: "{habit} seems to have found its way into the days on its own.",
            de: "{habit} scheint von selbst in die Tage gefunden zu haben.",
        },
    },
    Observation {
        id: "effortless-days",
        category: ObservationCategory::Ease,
        conditions: conditions(PatternType::EffortlessMoment),
        cooldown_days: 21,
        text: ObservationText {
            en: "Many of the recent days carried at least one small check-in.",
            de: "Viele der letzten Tage trugen mindestens ein kleines Zeichen.",
        },
    },
    Observation {
        id: "habits-together-pair",
        category: ObservationCategory::Relationship,
        conditions: pair_conditions(PatternType::HabitsTogether),
        cooldown_days: 21,
        text: ObservationText {
            en: "{habitA} and {habitB} often land on the same days.",
            de: "{habitA} und {habitB} landen oft auf denselben Tagen.",
        },
    },
    Observation {
        id: "habit-sequence-order",
        category: ObservationCategory::Relationship,
        conditions: pair_conditions(PatternType::HabitSequence),
        cooldown_days: 21,
        text: ObservationText {
            en: "On shared days, {habitA} tends to come before {habitB}.",
            de: "An gemeinsamen Tagen kommt {habitA} meist vor {habitB}.",
        },
    },
    Observation {
        id: "general-week-of-data",
        category: ObservationCategory::Meta,
        conditions: general_conditions(7),
        cooldown_days: 21,
        text: ObservationText {
            en: "A week of small records has accumulated. Looking back sometimes shows more than looking forward.",
            de: "Eine Woche kleiner Aufzeichnungen ist zusammengekommen. Zurückschauen zeigt manchmal mehr als Vorausschauen.",
        },
    },
    Observation {
        id: "general-noticing",
        category: ObservationCategory::Noticing,
        conditions: general_conditions(7),
        cooldown_days: 28,
        text: ObservationText {
            en: "The days you record are starting to form a picture. No need to interpret it yet.",
            de: "Die Tage, die du festhältst, beginnen ein Bild zu formen. Es muss noch nicht gedeutet werden.",
        },
    },
    Observation {
        id: "general-open-question",
        category: ObservationCategory::OpenEnd,
        conditions: general_conditions(10),
        cooldown_days: 30,
        text: ObservationText {
            en: "Is there a moment from the last days that stayed with you?",
            de: "Gibt es einen Moment aus den letzten Tagen, der geblieben ist?",
        },
    },
];
