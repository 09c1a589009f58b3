//! Built-in English lexicon.

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

/// Builds the default English lexicon.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn lexicon() -> Lexicon {
    let mut lex = Lexicon::new(Language::English);

    // Auxiliaries.
    lex.insert(
        WordEntry::new("be", LexicalCategory::Verb)
            .with(Feature::Copular, true)
            .with(Feature::Present1S, "am")
            .with(Feature::Present2S, "are")
            .with(Feature::Present3S, "is")
            .with(Feature::Present1P, "are")
            .with(Feature::Present2P, "are")
            .with(Feature::Present3P, "are")
            .with(Feature::Past1S, "was")
            .with(Feature::Past2S, "were")
            .with(Feature::Past3S, "was")
            .with(Feature::Past1P, "were")
            .with(Feature::Past2P, "were")
            .with(Feature::Past3P, "were")
            .with(Feature::PastParticiple, "been")
            .with(Feature::PresentParticiple, "being"),
    );
    lex.insert(
        WordEntry::new("do", LexicalCategory::Verb)
            .with(Feature::Present3S, "does")
            .with(Feature::Past1S, "did")
            .with(Feature::Past2S, "did")
            .with(Feature::Past3S, "did")
            .with(Feature::Past1P, "did")
            .with(Feature::Past2P, "did")
            .with(Feature::Past3P, "did")
            .with(Feature::PastParticiple, "done"),
    );
    lex.insert(
        WordEntry::new("have", LexicalCategory::Verb)
            .with(Feature::Present3S, "has")
            .with(Feature::Past1S, "had")
            .with(Feature::Past2S, "had")
            .with(Feature::Past3S, "had")
            .with(Feature::Past1P, "had")
            .with(Feature::Past2P, "had")
            .with(Feature::Past3P, "had")
            .with(Feature::PastParticiple, "had"),
    );
    lex.insert(WordEntry::new("will", LexicalCategory::Modal));
    lex.insert(WordEntry::new("would", LexicalCategory::Modal));
    lex.insert(WordEntry::new("can", LexicalCategory::Modal));
    lex.insert(WordEntry::new("must", LexicalCategory::Modal));

    // Irregular open-class verbs used by the corpus.
    lex.insert(
        WordEntry::new("think", LexicalCategory::Verb)
            .with(Feature::Past1S, "thought")
            .with(Feature::Past2S, "thought")
            .with(Feature::Past3S, "thought")
            .with(Feature::Past1P, "thought")
            .with(Feature::Past2P, "thought")
            .with(Feature::Past3P, "thought")
            .with(Feature::PastParticiple, "thought"),
    );
    lex.insert(
        WordEntry::new("get", LexicalCategory::Verb)
            .with(Feature::Past1S, "got")
            .with(Feature::Past2S, "got")
            .with(Feature::Past3S, "got")
            .with(Feature::Past1P, "got")
            .with(Feature::Past2P, "got")
            .with(Feature::Past3P, "got")
            .with(Feature::PastParticiple, "gotten"),
    );
    lex.insert(
        WordEntry::new("give", LexicalCategory::Verb)
            .with(Feature::Past1S, "gave")
            .with(Feature::Past2S, "gave")
            .with(Feature::Past3S, "gave")
            .with(Feature::Past1P, "gave")
            .with(Feature::Past2P, "gave")
            .with(Feature::Past3P, "gave")
            .with(Feature::PastParticiple, "given"),
    );
    lex.insert(
        WordEntry::new("go", LexicalCategory::Verb)
            .with(Feature::Present3S, "goes")
            .with(Feature::Past1S, "went")
            .with(Feature::Past2S, "went")
            .with(Feature::Past3S, "went")
            .with(Feature::Past1P, "went")
            .with(Feature::Past2P, "went")
            .with(Feature::Past3P, "went")
            .with(Feature::PastParticiple, "gone"),
    );
    lex.insert(WordEntry::new("want", LexicalCategory::Verb));
    lex.insert(WordEntry::new("motivate", LexicalCategory::Verb));
    lex.insert(WordEntry::new("present", LexicalCategory::Verb));

    // Personal pronouns.
    lex.insert(personal(
        "I",
        Person::First,
        NumberAgreement::Singular,
        DiscourseFunction::Subject,
    ));
    lex.insert(personal(
        "you",
        Person::Second,
        NumberAgreement::Singular,
        DiscourseFunction::Subject,
    ));
    lex.insert(
        personal(
            "he",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Subject,
        )
        .with(Feature::Gender, Gender::Masculine),
    );
    lex.insert(
        personal(
            "she",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Subject,
        )
        .with(Feature::Gender, Gender::Feminine),
    );
    lex.insert(
        personal(
            "it",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Subject,
        )
        .with(Feature::Gender, Gender::Neuter),
    );
    lex.insert(personal(
        "we",
        Person::First,
        NumberAgreement::Plural,
        DiscourseFunction::Subject,
    ));
    lex.insert(personal(
        "you",
        Person::Second,
        NumberAgreement::Plural,
        DiscourseFunction::Subject,
    ));
    lex.insert(personal(
        "they",
        Person::Third,
        NumberAgreement::Plural,
        DiscourseFunction::Subject,
    ));
    lex.insert(personal(
        "me",
        Person::First,
        NumberAgreement::Singular,
        DiscourseFunction::Object,
    ));
    lex.insert(personal(
        "you",
        Person::Second,
        NumberAgreement::Singular,
        DiscourseFunction::Object,
    ));
    lex.insert(
        personal(
            "him",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Object,
        )
        .with(Feature::Gender, Gender::Masculine),
    );
    lex.insert(
        personal(
            "her",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Object,
        )
        .with(Feature::Gender, Gender::Feminine),
    );
    lex.insert(
        personal(
            "it",
            Person::Third,
            NumberAgreement::Singular,
            DiscourseFunction::Object,
        )
        .with(Feature::Gender, Gender::Neuter),
    );
    lex.insert(personal(
        "us",
        Person::First,
        NumberAgreement::Plural,
        DiscourseFunction::Object,
    ));
    lex.insert(personal(
        "you",
        Person::Second,
        NumberAgreement::Plural,
        DiscourseFunction::Object,
    ));
    lex.insert(personal(
        "them",
        Person::Third,
        NumberAgreement::Plural,
        DiscourseFunction::Object,
    ));

    // Reflexive pronouns.
    lex.insert(reflexive("myself", Person::First, NumberAgreement::Singular));
    lex.insert(reflexive("yourself", Person::Second, NumberAgreement::Singular));
    lex.insert(reflexive("himself", Person::Third, NumberAgreement::Singular));
    lex.insert(reflexive("ourselves", Person::First, NumberAgreement::Plural));
    lex.insert(reflexive("yourselves", Person::Second, NumberAgreement::Plural));
    lex.insert(reflexive("themselves", Person::Third, NumberAgreement::Plural));

    // Relative pronouns.
    lex.insert(
        WordEntry::new("who", LexicalCategory::Pronoun)
            .with(Feature::PronounKind, PronounType::Relative),
    );
    lex.insert(
        WordEntry::new("which", LexicalCategory::Pronoun)
            .with(Feature::PronounKind, PronounType::Relative)
            .with(Feature::Gender, Gender::Neuter),
    );
    lex.insert(
        WordEntry::new("that", LexicalCategory::Pronoun)
            .with(Feature::PronounKind, PronounType::Relative),
    );

    // Interrogative words.
    for word in ["what", "who", "whom", "whose", "which"] {
        lex.insert(
            WordEntry::new(word, LexicalCategory::Pronoun)
                .with(Feature::PronounKind, PronounType::Interrogative),
        );
    }
    for word in ["how", "why", "where", "when"] {
        lex.insert(WordEntry::new(word, LexicalCategory::Adverb));
    }

    // Determiners.
    lex.insert(WordEntry::new("the", LexicalCategory::Determiner));
    lex.insert(WordEntry::new("a", LexicalCategory::Determiner));
    lex.insert(WordEntry::new("this", LexicalCategory::Determiner).with(Feature::PluralForm, "these"));
    lex.insert(WordEntry::new("my", LexicalCategory::Determiner).with(Feature::Possessive, true));
    lex.insert(WordEntry::new("your", LexicalCategory::Determiner).with(Feature::Possessive, true));

    // Complementisers.
    for word in ["that", "whether", "if", "because"] {
        lex.insert(WordEntry::new(word, LexicalCategory::Complementiser));
    }

    // Prepositions.
    for word in ["about", "to", "of", "in", "on", "at", "by", "for", "with"] {
        lex.insert(WordEntry::new(word, LexicalCategory::Preposition));
    }

    // Particles.
    lex.insert(WordEntry::new("not", LexicalCategory::Adverb));

    // Irregular nouns.
    lex.insert(WordEntry::new("man", LexicalCategory::Noun).with(Feature::PluralForm, "men"));
    lex.insert(WordEntry::new("child", LexicalCategory::Noun).with(Feature::PluralForm, "children"));
    lex.insert(WordEntry::new("key", LexicalCategory::Noun));
    lex.insert(WordEntry::new("computer", LexicalCategory::Noun));
    lex.insert(WordEntry::new("thought", LexicalCategory::Noun));
    lex.insert(WordEntry::new("holiday", LexicalCategory::Noun));

    // Adjectives with irregular degrees.
    lex.insert(
        WordEntry::new("good", LexicalCategory::Adjective)
            .with(Feature::ComparativeForm, "better")
            .with(Feature::SuperlativeForm, "best"),
    );
    lex.insert(WordEntry::new("smart", LexicalCategory::Adjective));

    // Inflected variants resolve back to their base entries.
    for (variant, base) in [
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("does", "do"),
        ("has", "have"),
        ("thinks", "think"),
    ] {
        lex.insert_variant(variant, LexicalCategory::Verb, base);
    }

    lex
}
