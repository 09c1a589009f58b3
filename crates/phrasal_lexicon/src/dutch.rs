//! Built-in Dutch lexicon.
//!
//! Covers the closed grammatical classes the Dutch syntax and morphology
//! rules depend on (auxiliaries, the negation particle, complementisers,
//! determiners, prepositions, the pronoun paradigms) plus the strong verbs
//! and gendered nouns the test corpus exercises.

use phrasal_foundation::{
    DiscourseFunction, Feature, Gender, Language, LexicalCategory, NumberAgreement, Person,
    PronounType,
};

use crate::{Lexicon, WordEntry};

fn personal(
    base: &str,
    person: Person,
    number: NumberAgreement,
    function: DiscourseFunction,
) -> WordEntry {
    WordEntry::new(base, LexicalCategory::Pronoun)
        .with(Feature::PronounKind, PronounType::Personal)
        .with(Feature::Person, person)
        .with(Feature::Number, number)
        .with(Feature::Function, function)
}

fn reflexive(base: &str, person: Person, number: NumberAgreement) -> WordEntry {
    personal(base, person, number, DiscourseFunction::Object).with(Feature::Reflexive, true)
}

/// Builds the default Dutch lexicon.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn lexicon() -> Lexicon {
    let mut lex = Lexicon::new(Language::Dutch);

    // Auxiliaries and other closed-class verbs.
    lex.insert(
        WordEntry::new("zijn", LexicalCategory::Verb)
            .with(Feature::Copular, true)
            .with(Feature::AlternateAuxiliary, true)
            .with(Feature::Present1S, "ben")
            .with(Feature::Present2S, "bent")
            .with(Feature::Present3S, "is")
            .with(Feature::Present1P, "zijn")
            .with(Feature::Present2P, "zijn")
            .with(Feature::Present3P, "zijn")
            .with(Feature::Past1S, "was")
            .with(Feature::Past2S, "was")
            .with(Feature::Past3S, "was")
            .with(Feature::Past1P, "waren")
            .with(Feature::Past2P, "waren")
            .with(Feature::Past3P, "waren")
            .with(Feature::PastRadical, "was")
            .with(Feature::PastParticiple, "geweest"),
    );
    lex.insert(
        WordEntry::new("hebben", LexicalCategory::Verb)
            .with(Feature::Present1S, "heb")
            .with(Feature::Present2S, "hebt")
            .with(Feature::Present3S, "heeft")
            .with(Feature::Past1S, "had")
            .with(Feature::Past2S, "had")
            .with(Feature::Past3S, "had")
            .with(Feature::Past1P, "hadden")
            .with(Feature::Past2P, "hadden")
            .with(Feature::Past3P, "hadden")
            .with(Feature::PastRadical, "had")
            .with(Feature::PastParticiple, "gehad"),
    );
    lex.insert(
        WordEntry::new("zullen", LexicalCategory::Verb)
            .with(Feature::Present1S, "zal")
            .with(Feature::Present2S, "zult")
            .with(Feature::Present3S, "zal")
            .with(Feature::Past1S, "zou")
            .with(Feature::Past2S, "zou")
            .with(Feature::Past3S, "zou")
            .with(Feature::Past1P, "zouden")
            .with(Feature::Past2P, "zouden")
            .with(Feature::Past3P, "zouden"),
    );
    lex.insert(
        WordEntry::new("worden", LexicalCategory::Verb)
            .with(Feature::AlternateAuxiliary, true)
            .with(Feature::Present1S, "word")
            .with(Feature::Present2S, "wordt")
            .with(Feature::Present3S, "wordt")
            .with(Feature::Past1S, "werd")
            .with(Feature::Past2S, "werd")
            .with(Feature::Past3S, "werd")
            .with(Feature::Past1P, "werden")
            .with(Feature::Past2P, "werden")
            .with(Feature::Past3P, "werden")
            .with(Feature::PastParticiple, "geworden"),
    );
    lex.insert(
        WordEntry::new("kunnen", LexicalCategory::Verb)
            .with(Feature::Present1S, "kan")
            .with(Feature::Present2S, "kunt")
            .with(Feature::Present3S, "kan")
            .with(Feature::Past1S, "kon")
            .with(Feature::Past2S, "kon")
            .with(Feature::Past3S, "kon")
            .with(Feature::Past1P, "konden")
            .with(Feature::Past2P, "konden")
            .with(Feature::Past3P, "konden")
            .with(Feature::PastParticiple, "gekund"),
    );

    // Strong and irregular open-class verbs used by the corpus.
    lex.insert(
        WordEntry::new("denken", LexicalCategory::Verb)
            .with(Feature::PastRadical, "dacht")
            .with(Feature::PastParticiple, "gedacht"),
    );
    lex.insert(
        WordEntry::new("doen", LexicalCategory::Verb)
            .with(Feature::Present1S, "doe")
            .with(Feature::Present2S, "doet")
            .with(Feature::Present3S, "doet")
            .with(Feature::PastRadical, "deed")
            .with(Feature::Past1P, "deden")
            .with(Feature::Past2P, "deden")
            .with(Feature::Past3P, "deden")
            .with(Feature::PastParticiple, "gedaan"),
    );
    lex.insert(
        WordEntry::new("geven", LexicalCategory::Verb)
            .with(Feature::PastRadical, "gaf")
            .with(Feature::Past1P, "gaven")
            .with(Feature::Past2P, "gaven")
            .with(Feature::Past3P, "gaven")
            .with(Feature::PastParticiple, "gegeven"),
    );
    lex.insert(
        WordEntry::new("krijgen", LexicalCategory::Verb)
            .with(Feature::PastRadical, "kreeg")
            .with(Feature::Past1P, "kregen")
            .with(Feature::Past2P, "kregen")
            .with(Feature::Past3P, "kregen")
            .with(Feature::PastParticiple, "gekregen"),
    );
    lex.insert(
        WordEntry::new("komen", LexicalCategory::Verb)
            .with(Feature::AlternateAuxiliary, true)
            .with(Feature::Present1S, "kom")
            .with(Feature::Present2S, "komt")
            .with(Feature::Present3S, "komt")
            .with(Feature::PastRadical, "kwam")
            .with(Feature::Past1P, "kwamen")
            .with(Feature::Past2P, "kwamen")
            .with(Feature::Past3P, "kwamen")
            .with(Feature::PastParticiple, "gekomen"),
    );
    lex.insert(
        WordEntry::new("gaan", LexicalCategory::Verb)
            .with(Feature::AlternateAuxiliary, true)
            .with(Feature::Present1S, "ga")
            .with(Feature::Present2S, "gaat")
            .with(Feature::Present3S, "gaat")
            .with(Feature::PastRadical, "ging")
            .with(Feature::Past1P, "gingen")
            .with(Feature::Past2P, "gingen")
            .with(Feature::Past3P, "gingen")
            .with(Feature::PastParticiple, "gegaan"),
    );
    lex.insert(WordEntry::new("presenteren", LexicalCategory::Verb));
    lex.insert(WordEntry::new("motiveren", LexicalCategory::Verb));
    lex.insert(
        WordEntry::new("opbellen", LexicalCategory::Verb).with(Feature::Preverb, "op"),
    );

    // Personal pronouns, subject row then object row.
    lex.insert(personal(
        "ik",
        Person::First,
        NumberAgreement::Singular,
        DiscourseFunction::Subject,
    ));
    lex.insert(personal(
        "jij",
        Person::Second,
        NumberAgreement::Singular,
        DiscourseFunction::Subject,
    ));
    lex.insert(
        personal(
            "hij",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Subject,
        )
        .with(Feature::Gender, Gender::Masculine),
    );
    lex.insert(
        personal(
            "zij",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Subject,
        )
        .with(Feature::Gender, Gender::Feminine),
    );
    lex.insert(
        personal(
            "het",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Subject,
        )
        .with(Feature::Gender, Gender::Neuter),
    );
    lex.insert(personal(
        "wij",
        Person::First,
        NumberAgreement::Plural,
        DiscourseFunction::Subject,
    ));
    lex.insert(personal(
        "jullie",
        Person::Second,
        NumberAgreement::Plural,
        DiscourseFunction::Subject,
    ));
    lex.insert(personal(
        "zij",
        Person::Third,
        NumberAgreement::Plural,
        DiscourseFunction::Subject,
    ));
    lex.insert(personal(
        "mij",
        Person::First,
        NumberAgreement::Singular,
        DiscourseFunction::Object,
    ));
    lex.insert(personal(
        "jou",
        Person::Second,
        NumberAgreement::Singular,
        DiscourseFunction::Object,
    ));
    lex.insert(
        personal(
            "hem",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Object,
        )
        .with(Feature::Gender, Gender::Masculine),
    );
    lex.insert(
        personal(
            "haar",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Object,
        )
        .with(Feature::Gender, Gender::Feminine),
    );
    lex.insert(
        personal(
            "het",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Object,
        )
        .with(Feature::Gender, Gender::Neuter),
    );
    lex.insert(personal(
        "ons",
        Person::First,
        NumberAgreement::Plural,
        DiscourseFunction::Object,
    ));
    lex.insert(personal(
        "jullie",
        Person::Second,
        NumberAgreement::Plural,
        DiscourseFunction::Object,
    ));
    lex.insert(personal(
        "hen",
        Person::Third,
        NumberAgreement::Plural,
        DiscourseFunction::Object,
    ));

    // Reflexive pronouns.
    lex.insert(reflexive("me", Person::First, NumberAgreement::Singular));
    lex.insert(reflexive("je", Person::Second, NumberAgreement::Singular));
    lex.insert(reflexive("zich", Person::Third, NumberAgreement::Singular));
    lex.insert(reflexive("ons", Person::First, NumberAgreement::Plural));
    lex.insert(reflexive("je", Person::Second, NumberAgreement::Plural));
    lex.insert(reflexive("zich", Person::Third, NumberAgreement::Plural));

    // Relative pronouns: "dat" for neuter singular antecedents, "die"
    // everywhere else.
    lex.insert(
        WordEntry::new("die", LexicalCategory::Pronoun)
            .with(Feature::PronounKind, PronounType::Relative)
            .with(Feature::PluralForm, "die"),
    );
    lex.insert(
        WordEntry::new("dat", LexicalCategory::Pronoun)
            .with(Feature::PronounKind, PronounType::Relative)
            .with(Feature::Gender, Gender::Neuter),
    );

    // Interrogative words.
    for word in ["wie", "wat"] {
        lex.insert(
            WordEntry::new(word, LexicalCategory::Pronoun)
                .with(Feature::PronounKind, PronounType::Interrogative),
        );
    }
    lex.insert(
        WordEntry::new("welke", LexicalCategory::Pronoun)
            .with(Feature::PronounKind, PronounType::Interrogative),
    );
    lex.insert(
        WordEntry::new("wiens", LexicalCategory::Pronoun)
            .with(Feature::PronounKind, PronounType::Interrogative)
            .with(Feature::Possessive, true),
    );
    for word in ["hoe", "waar", "wanneer", "waarom", "hoeveel", "hoezo"] {
        lex.insert(WordEntry::new(word, LexicalCategory::Adverb));
    }

    // Determiners.
    lex.insert(
        WordEntry::new("de", LexicalCategory::Determiner)
            .with(Feature::Gender, Gender::Common)
            .with(Feature::PluralForm, "de"),
    );
    lex.insert(
        WordEntry::new("het", LexicalCategory::Determiner)
            .with(Feature::Gender, Gender::Neuter)
            .with(Feature::PluralForm, "de"),
    );
    lex.insert(WordEntry::new("een", LexicalCategory::Determiner));
    lex.insert(WordEntry::new("geen", LexicalCategory::Determiner));
    lex.insert(
        WordEntry::new("jouw", LexicalCategory::Determiner).with(Feature::Possessive, true),
    );
    lex.insert(
        WordEntry::new("mijn", LexicalCategory::Determiner).with(Feature::Possessive, true),
    );

    // Complementisers.
    for word in ["dat", "of", "omdat", "als", "om", "zodat", "doordat", "aangezien"] {
        lex.insert(WordEntry::new(word, LexicalCategory::Complementiser));
    }

    // Prepositions.
    for word in [
        "aan", "van", "over", "in", "op", "met", "door", "naar", "voor", "bij", "uit",
    ] {
        lex.insert(WordEntry::new(word, LexicalCategory::Preposition));
    }

    // Particles.
    lex.insert(WordEntry::new("niet", LexicalCategory::Adverb));
    lex.insert(WordEntry::new("te", LexicalCategory::Adverb));
    lex.insert(WordEntry::new("er", LexicalCategory::Adverb));

    // Gendered nouns and irregular plurals.
    lex.insert(WordEntry::new("vakantie", LexicalCategory::Noun).with(Feature::Gender, Gender::Common));
    lex.insert(WordEntry::new("sleutel", LexicalCategory::Noun).with(Feature::Gender, Gender::Common));
    lex.insert(
        WordEntry::new("gedachte", LexicalCategory::Noun)
            .with(Feature::Gender, Gender::Common)
            .with(Feature::PluralForm, "gedachten"),
    );
    lex.insert(WordEntry::new("computer", LexicalCategory::Noun).with(Feature::Gender, Gender::Common));
    lex.insert(
        WordEntry::new("huis", LexicalCategory::Noun)
            .with(Feature::Gender, Gender::Neuter)
            .with(Feature::PluralForm, "huizen"),
    );
    lex.insert(
        WordEntry::new("kind", LexicalCategory::Noun)
            .with(Feature::Gender, Gender::Neuter)
            .with(Feature::PluralForm, "kinderen"),
    );
    lex.insert(
        WordEntry::new("stad", LexicalCategory::Noun)
            .with(Feature::Gender, Gender::Common)
            .with(Feature::PluralForm, "steden"),
    );
    lex.insert(WordEntry::new("hond", LexicalCategory::Noun).with(Feature::Gender, Gender::Common));
    lex.insert(
        WordEntry::new("slim", LexicalCategory::Adjective),
    );
    lex.insert(
        WordEntry::new("goed", LexicalCategory::Adjective)
            .with(Feature::ComparativeForm, "beter")
            .with(Feature::SuperlativeForm, "best"),
    );

    // First-person stems resolve back to their infinitive entries, so a
    // clause can be built from "denk" as well as "denken".
    for (variant, base) in [
        ("ben", "zijn"),
        ("is", "zijn"),
        ("heb", "hebben"),
        ("zal", "zullen"),
        ("word", "worden"),
        ("kan", "kunnen"),
        ("denk", "denken"),
        ("doe", "doen"),
        ("geef", "geven"),
        ("krijg", "krijgen"),
        ("kom", "komen"),
        ("ga", "gaan"),
        ("presenteer", "presenteren"),
        ("motiveer", "motiveren"),
        ("bel op", "opbellen"),
    ] {
        lex.insert_variant(variant, LexicalCategory::Verb, base);
    }

    lex
}
