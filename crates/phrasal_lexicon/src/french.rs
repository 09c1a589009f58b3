//! Built-in French lexicon.

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

/// Builds the default French lexicon.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn lexicon() -> Lexicon {
    let mut lex = Lexicon::new(Language::French);

    // Auxiliaries.
    lex.insert(
        WordEntry::new("être", LexicalCategory::Verb)
            .with(Feature::Copular, true)
            .with(Feature::Present1S, "suis")
            .with(Feature::Present2S, "es")
            .with(Feature::Present3S, "est")
            .with(Feature::Present1P, "sommes")
            .with(Feature::Present2P, "êtes")
            .with(Feature::Present3P, "sont")
            .with(Feature::PastRadical, "ét")
            .with(Feature::FutureRadical, "ser")
            .with(Feature::PastParticiple, "été"),
    );
    lex.insert(
        WordEntry::new("avoir", LexicalCategory::Verb)
            .with(Feature::Present1S, "ai")
            .with(Feature::Present2S, "as")
            .with(Feature::Present3S, "a")
            .with(Feature::Present1P, "avons")
            .with(Feature::Present2P, "avez")
            .with(Feature::Present3P, "ont")
            .with(Feature::PastRadical, "av")
            .with(Feature::FutureRadical, "aur")
            .with(Feature::PastParticiple, "eu"),
    );
    lex.insert(
        WordEntry::new("aller", LexicalCategory::Verb)
            .with(Feature::AlternateAuxiliary, true)
            .with(Feature::Present1S, "vais")
            .with(Feature::Present2S, "vas")
            .with(Feature::Present3S, "va")
            .with(Feature::Present3P, "vont")
            .with(Feature::FutureRadical, "ir")
            .with(Feature::PastParticiple, "allé"),
    );
    lex.insert(
        WordEntry::new("pouvoir", LexicalCategory::Verb)
            .with(Feature::CliticRising, true)
            .with(Feature::Present1S, "peux")
            .with(Feature::Present2S, "peux")
            .with(Feature::Present3S, "peut")
            .with(Feature::Present3P, "peuvent")
            .with(Feature::FutureRadical, "pourr")
            .with(Feature::PastParticiple, "pu"),
    );

    // Regular first-group verbs used by the corpus.
    for verb in ["penser", "donner", "aimer", "demander", "rester"] {
        let mut entry = WordEntry::new(verb, LexicalCategory::Verb);
        if verb == "rester" {
            entry = entry.with(Feature::AlternateAuxiliary, true);
        }
        lex.insert(entry);
    }

    // Subject clitic pronouns.
    lex.insert(personal(
        "je",
        Person::First,
        NumberAgreement::Singular,
        DiscourseFunction::Subject,
    ));
    lex.insert(personal(
        "tu",
        Person::Second,
        NumberAgreement::Singular,
        DiscourseFunction::Subject,
    ));
    lex.insert(
        personal(
            "il",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Subject,
        )
        .with(Feature::Gender, Gender::Masculine),
    );
    lex.insert(
        personal(
            "elle",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Subject,
        )
        .with(Feature::Gender, Gender::Feminine),
    );
    lex.insert(personal(
        "nous",
        Person::First,
        NumberAgreement::Plural,
        DiscourseFunction::Subject,
    ));
    lex.insert(personal(
        "vous",
        Person::Second,
        NumberAgreement::Plural,
        DiscourseFunction::Subject,
    ));
    lex.insert(
        personal(
            "ils",
            Person::Third,
            NumberAgreement::Plural,
            DiscourseFunction::Subject,
        )
        .with(Feature::Gender, Gender::Masculine),
    );
    lex.insert(
        personal(
            "elles",
            Person::Third,
            NumberAgreement::Plural,
            DiscourseFunction::Subject,
        )
        .with(Feature::Gender, Gender::Feminine),
    );

    // Object clitic pronouns.
    lex.insert(personal(
        "me",
        Person::First,
        NumberAgreement::Singular,
        DiscourseFunction::Object,
    ));
    lex.insert(personal(
        "te",
        Person::Second,
        NumberAgreement::Singular,
        DiscourseFunction::Object,
    ));
    lex.insert(
        personal(
            "le",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Object,
        )
        .with(Feature::Gender, Gender::Masculine),
    );
    lex.insert(
        personal(
            "la",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Object,
        )
        .with(Feature::Gender, Gender::Feminine),
    );
    lex.insert(personal(
        "nous",
        Person::First,
        NumberAgreement::Plural,
        DiscourseFunction::Object,
    ));
    lex.insert(personal(
        "vous",
        Person::Second,
        NumberAgreement::Plural,
        DiscourseFunction::Object,
    ));
    lex.insert(personal(
        "les",
        Person::Third,
        NumberAgreement::Plural,
        DiscourseFunction::Object,
    ));
    lex.insert(personal(
        "lui",
        Person::Third,
        NumberAgreement::Singular,
        DiscourseFunction::IndirectObject,
    ));
    lex.insert(personal(
        "leur",
        Person::Third,
        NumberAgreement::Plural,
        DiscourseFunction::IndirectObject,
    ));

    // Reflexive pronouns.
    lex.insert(
        personal(
            "me",
            Person::First,
            NumberAgreement::Singular,
            DiscourseFunction::Object,
        )
        .with(Feature::Reflexive, true),
    );
    lex.insert(
        personal(
            "te",
            Person::Second,
            NumberAgreement::Singular,
            DiscourseFunction::Object,
        )
        .with(Feature::Reflexive, true),
    );
    lex.insert(
        personal(
            "se",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Object,
        )
        .with(Feature::Reflexive, true),
    );
    lex.insert(
        personal(
            "se",
            Person::Third,
            NumberAgreement::Plural,
            DiscourseFunction::Object,
        )
        .with(Feature::Reflexive, true),
    );

    // Bound special pronouns.
    lex.insert(
        WordEntry::new("en", LexicalCategory::Pronoun)
            .with(Feature::PronounKind, PronounType::SpecialPersonal),
    );
    lex.insert(
        WordEntry::new("y", LexicalCategory::Pronoun)
            .with(Feature::PronounKind, PronounType::SpecialPersonal),
    );

    // Relative pronouns.
    lex.insert(
        WordEntry::new("qui", LexicalCategory::Pronoun)
            .with(Feature::PronounKind, PronounType::Relative),
    );
    lex.insert(
        WordEntry::new("que", LexicalCategory::Pronoun)
            .with(Feature::PronounKind, PronounType::Relative),
    );
    lex.insert(
        WordEntry::new("lequel", LexicalCategory::Pronoun)
            .with(Feature::PronounKind, PronounType::Relative)
            .with(Feature::FeminineSingular, "laquelle")
            .with(Feature::PluralForm, "lesquels")
            .with(Feature::FemininePlural, "lesquelles"),
    );

    // Determiners.
    lex.insert(
        WordEntry::new("le", LexicalCategory::Determiner)
            .with(Feature::FeminineSingular, "la")
            .with(Feature::PluralForm, "les"),
    );
    lex.insert(
        WordEntry::new("un", LexicalCategory::Determiner).with(Feature::FeminineSingular, "une"),
    );
    lex.insert(
        WordEntry::new("ce", LexicalCategory::Determiner)
            .with(Feature::FeminineSingular, "cette")
            .with(Feature::PluralForm, "ces"),
    );

    // Complementisers.
    lex.insert(WordEntry::new("que", LexicalCategory::Complementiser));
    lex.insert(WordEntry::new("si", LexicalCategory::Complementiser));

    // Prepositions.
    for word in ["de", "à", "sur", "dans", "en", "par", "pour", "avec"] {
        lex.insert(WordEntry::new(word, LexicalCategory::Preposition));
    }

    // Particles.
    lex.insert(WordEntry::new("ne", LexicalCategory::Adverb));
    lex.insert(WordEntry::new("pas", LexicalCategory::Adverb));

    // Periphrastic progressive scaffolding ("en train de").
    lex.insert(WordEntry::new("train", LexicalCategory::Noun).with(Feature::Gender, Gender::Masculine));

    // Gendered nouns and irregular plurals.
    lex.insert(
        WordEntry::new("homme", LexicalCategory::Noun).with(Feature::Gender, Gender::Masculine),
    );
    lex.insert(
        WordEntry::new("femme", LexicalCategory::Noun).with(Feature::Gender, Gender::Feminine),
    );
    lex.insert(
        WordEntry::new("cheval", LexicalCategory::Noun)
            .with(Feature::Gender, Gender::Masculine)
            .with(Feature::PluralForm, "chevaux"),
    );
    lex.insert(
        WordEntry::new("chien", LexicalCategory::Noun)
            .with(Feature::Gender, Gender::Masculine)
            .with(Feature::OppositeGender, "chienne"),
    );
    lex.insert(
        WordEntry::new("chienne", LexicalCategory::Noun)
            .with(Feature::Gender, Gender::Feminine)
            .with(Feature::OppositeGender, "chien"),
    );
    lex.insert(
        WordEntry::new("beau", LexicalCategory::Adjective)
            .with(Feature::FeminineSingular, "belle")
            .with(Feature::Liaison, "bel")
            .with(Feature::Preposed, true),
    );

    lex
}
