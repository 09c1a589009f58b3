//! Closed grammatical categories and the feature key space.

use std::fmt;

/// Target language of a lexicon or realisation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// English.
    English,
    /// French.
    French,
    /// Dutch.
    Dutch,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::French => write!(f, "french"),
            Self::Dutch => write!(f, "dutch"),
        }
    }
}

/// Grammatical tense.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tense {
    /// Present tense (the default for an unset tense feature).
    #[default]
    Present,
    /// Past tense.
    Past,
    /// Future tense (realised with a future auxiliary in Dutch/English).
    Future,
    /// Conditional tense.
    Conditional,
}

/// Grammatical person.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Person {
    /// First person.
    First,
    /// Second person.
    Second,
    /// Third person (the default for an unset person feature).
    #[default]
    Third,
}

/// Grammatical number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberAgreement {
    /// Singular (the default for an unset number feature).
    #[default]
    Singular,
    /// Plural.
    Plural,
    /// Number-neutral; treated as singular by agreement rules.
    Both,
}

impl NumberAgreement {
    /// Returns true for plural agreement.
    #[must_use]
    pub const fn is_plural(self) -> bool {
        matches!(self, Self::Plural)
    }
}

/// Grammatical gender.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    /// Masculine (the default for an unset gender feature).
    #[default]
    Masculine,
    /// Feminine.
    Feminine,
    /// Neuter (Dutch "het" words).
    Neuter,
    /// Common gender (Dutch "de" words).
    Common,
}

/// Form of a verb or clause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Form {
    /// Plain indicative form (the default).
    #[default]
    Normal,
    /// Full infinitive.
    Infinitive,
    /// Bare infinitive (no particle).
    BareInfinitive,
    /// Gerund.
    Gerund,
    /// Imperative.
    Imperative,
    /// Present participle.
    PresentParticiple,
    /// Past participle.
    PastParticiple,
    /// Subjunctive.
    Subjunctive,
}

/// The grammatical role of an element within its parent phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiscourseFunction {
    /// Clause subject.
    Subject,
    /// Direct object.
    Object,
    /// Indirect object.
    IndirectObject,
    /// Generic complement.
    Complement,
    /// Modifier realised clause-initially.
    FrontModifier,
    /// Modifier realised before the head.
    PreModifier,
    /// Modifier realised after the head.
    PostModifier,
    /// Specifier of a noun phrase.
    Specifier,
    /// Phrase head.
    Head,
    /// Clause cue phrase.
    CuePhrase,
    /// Auxiliary verb inside a verb group.
    Auxiliary,
}

/// Matrix versus subordinate clause status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClauseStatus {
    /// Main clause (the default).
    #[default]
    Matrix,
    /// Embedded clause; triggers complementiser emission.
    Subordinate,
}

/// The closed set of question types the realiser can produce.
///
/// Any further type is new design work, not an extension of the existing
/// keyword/splice machinery, so the enum is deliberately exhaustive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterrogativeType {
    /// Plain yes/no question.
    YesNo,
    /// Manner question ("How did John kiss Mary?").
    How,
    /// Degree-of-adjective question ("How smart is John?").
    HowAdjective,
    /// "How come ...?" reason question, realised without inversion.
    HowCome,
    /// Quantity question ("How many computers ...?").
    HowMany,
    /// Condition/quality question over a predicate ("How was your holiday?").
    HowPredicate,
    /// Question standing in for the direct object ("What did John buy?").
    WhatObject,
    /// Question standing in for a non-person subject ("What motivated John?").
    WhatSubject,
    /// Time question.
    When,
    /// Place question.
    Where,
    /// Choice-from-set question ("Which book ...?").
    Which,
    /// Question standing in for the indirect object ("Whom ... to?").
    WhoIndirectObject,
    /// Question standing in for a person direct object.
    WhoObject,
    /// Question standing in for a person subject.
    WhoSubject,
    /// Ownership question ("Whose keys ...?").
    Whose,
    /// Reason question.
    Why,
}

impl InterrogativeType {
    /// True if the question word stands in for the direct object, so the
    /// object itself must be suppressed from complement realisation.
    #[must_use]
    pub const fn asks_about_object(self) -> bool {
        matches!(self, Self::WhoObject | Self::WhatObject)
    }

    /// True if the question word stands in for the indirect object.
    #[must_use]
    pub const fn asks_about_indirect_object(self) -> bool {
        matches!(self, Self::WhoIndirectObject)
    }

    /// True if the question word stands in for the subject; the overt subject
    /// is suppressed and the verb agrees in the third person.
    #[must_use]
    pub const fn asks_about_subject(self) -> bool {
        matches!(self, Self::WhoSubject | Self::WhatSubject)
    }

    /// True if the realised object constituent is relocated to appear
    /// directly after the question word, before the verb group.
    #[must_use]
    pub const fn fronts_object(self) -> bool {
        matches!(
            self,
            Self::Which | Self::HowMany | Self::HowAdjective | Self::Whose
        )
    }
}

/// Pronoun subtypes recorded on lexicon entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PronounType {
    /// Ordinary personal pronoun.
    Personal,
    /// Bound special personal pronoun (French "en", "y").
    SpecialPersonal,
    /// Numeral pronoun.
    Numeral,
    /// Possessive pronoun.
    Possessive,
    /// Demonstrative pronoun.
    Demonstrative,
    /// Relative pronoun.
    Relative,
    /// Interrogative pronoun.
    Interrogative,
    /// Indefinite pronoun.
    Indefinite,
    /// Reflexive pronoun.
    Reflexive,
}

/// Lexical category of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexicalCategory {
    /// Noun.
    Noun,
    /// Verb.
    Verb,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Determiner.
    Determiner,
    /// Pronoun.
    Pronoun,
    /// Preposition.
    Preposition,
    /// Conjunction.
    Conjunction,
    /// Complementiser.
    Complementiser,
    /// Modal verb.
    Modal,
}

impl fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Determiner => "determiner",
            Self::Pronoun => "pronoun",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Complementiser => "complementiser",
            Self::Modal => "modal",
        };
        write!(f, "{name}")
    }
}

/// Phrase category of a phrase element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhraseCategory {
    /// Clause.
    Clause,
    /// Noun phrase.
    NounPhrase,
    /// Verb phrase.
    VerbPhrase,
    /// Prepositional phrase.
    PrepositionPhrase,
    /// Adjective phrase.
    AdjectivePhrase,
    /// Adverb phrase.
    AdverbPhrase,
    /// Pre-realised canned text.
    CannedText,
}

/// Inflection pattern of a word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InflectionPattern {
    /// Regular inflection (the default).
    #[default]
    Regular,
    /// Regular inflection with final-consonant doubling before suffixes.
    RegularDouble,
}

/// Feature keys.
///
/// One flat key space covers both the universal syntactic features and the
/// per-language lexical features; the bag stores them uniformly and the
/// accessors on [`crate::FeatureBag`] supply the documented defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feature {
    // --- universal syntactic features -----------------------------------
    /// Clause or verb tense.
    Tense,
    /// Grammatical person.
    Person,
    /// Grammatical number.
    Number,
    /// Grammatical gender.
    Gender,
    /// Verb/clause form.
    Form,
    /// Discourse function within the parent.
    Function,
    /// Matrix/subordinate status of a clause.
    ClauseStatus,
    /// Interrogative type of a clause.
    Interrogative,
    /// Passive voice flag.
    Passive,
    /// Perfect aspect flag.
    Perfect,
    /// Progressive aspect flag.
    Progressive,
    /// Negated polarity flag.
    Negated,
    /// Possessive marking on a noun.
    Possessive,
    /// Marks a noun phrase to be realised as a pronoun.
    Pronominal,
    /// Elided elements are skipped during realisation.
    Elided,
    /// Proper nouns never pluralise.
    Proper,
    /// Modal verb base form governing the clause.
    Modal,
    /// Lexical complementiser of a subordinate clause.
    Complementiser,
    /// Suppresses complementiser emission when set.
    SuppressComplementiser,
    /// Cue phrase element of a clause.
    CuePhrase,
    /// Marks a Dutch "te"-infinitive verb group.
    TeInfinitive,
    /// Preverb of a separable compound verb.
    Preverb,
    /// Phrase replaced by a relative pronoun in a relative clause.
    RelativePhrase,
    /// Word overriding the default negation particle.
    NegationWord,
    /// Inflection pattern override.
    Pattern,
    /// Comparative degree flag.
    Comparative,
    /// Superlative degree flag.
    Superlative,
    /// Particle appended to a realised word.
    Particle,

    // --- internal bookkeeping -------------------------------------------
    /// Marks a complement chosen as a clitic for the current pass.
    Clitic,
    /// Marks a complement standing in a relativised slot.
    Relativised,
    /// Marks a complement already realised earlier in the current pass.
    Consumed,
    /// When false, the verb-phrase pass skips its auxiliary segment.
    RealiseAuxiliary,
    /// Suppresses morphological inflection of a token.
    NonMorph,
    /// Set on questions whose finite verb precedes the subject.
    Inverted,

    // --- lexical features -----------------------------------------------
    /// Pronoun subtype.
    PronounKind,
    /// Reflexive pronoun/complement flag.
    Reflexive,
    /// Copular verb flag.
    Copular,
    /// Verb selects the alternate perfect auxiliary (zijn / être).
    AlternateAuxiliary,
    /// Modal lets clitic pronouns climb to it.
    CliticRising,
    /// Adjective preposed before the noun by default.
    Preposed,
    /// Word begins with an aspirated h, blocking elision.
    AspiratedH,
    /// Irregular plural form.
    PluralForm,
    /// Irregular feminine singular form.
    FeminineSingular,
    /// Irregular feminine plural form.
    FemininePlural,
    /// Noun base form of the opposite gender.
    OppositeGender,
    /// Pre-vowel liaison form of an adjective.
    Liaison,
    /// Irregular comparative form.
    ComparativeForm,
    /// Irregular superlative form.
    SuperlativeForm,
    /// Irregular past radical.
    PastRadical,
    /// Irregular future radical.
    FutureRadical,
    /// Irregular past participle.
    PastParticiple,
    /// Irregular present participle.
    PresentParticiple,
    /// Irregular feminine past participle.
    FemininePastParticiple,
    /// Irregular present indicative, first person singular.
    Present1S,
    /// Irregular present indicative, second person singular.
    Present2S,
    /// Irregular present indicative, third person singular.
    Present3S,
    /// Irregular present indicative, first person plural.
    Present1P,
    /// Irregular present indicative, second person plural.
    Present2P,
    /// Irregular present indicative, third person plural.
    Present3P,
    /// Irregular past indicative, first person singular.
    Past1S,
    /// Irregular past indicative, second person singular.
    Past2S,
    /// Irregular past indicative, third person singular.
    Past3S,
    /// Irregular past indicative, first person plural.
    Past1P,
    /// Irregular past indicative, second person plural.
    Past2P,
    /// Irregular past indicative, third person plural.
    Past3P,
    /// Irregular imperative, second person singular.
    Imperative2S,
    /// Irregular imperative, first person plural.
    Imperative1P,
    /// Irregular imperative, second person plural.
    Imperative2P,
    /// Irregular subjunctive, first person singular.
    Subjunctive1S,
    /// Irregular subjunctive, second person singular.
    Subjunctive2S,
    /// Irregular subjunctive, third person singular.
    Subjunctive3S,
    /// Irregular subjunctive, first person plural.
    Subjunctive1P,
    /// Irregular subjunctive, second person plural.
    Subjunctive2P,
    /// Irregular subjunctive, third person plural.
    Subjunctive3P,
}
