//! Violation codes, default message templates and their translations.

/// Machine-readable violation codes of the built-in constraints.
pub mod code {
    pub const BLANK: &str = "blank";
    pub const NOT_BLANK: &str = "notBlank";
    pub const NIL: &str = "nil";
    pub const NOT_NIL: &str = "notNil";
    pub const NOT_TRUE: &str = "notTrue";
    pub const NOT_FALSE: &str = "notFalse";

    pub const LENGTH_TOO_FEW: &str = "lengthTooFew";
    pub const LENGTH_TOO_MANY: &str = "lengthTooMany";
    pub const LENGTH_NOT_EXACT: &str = "lengthNotExact";

    pub const COUNT_TOO_FEW: &str = "countTooFew";
    pub const COUNT_TOO_MANY: &str = "countTooMany";
    pub const COUNT_NOT_EXACT: &str = "countNotExact";

    pub const NOT_EQUAL: &str = "notEqual";
    pub const IS_EQUAL: &str = "isEqual";
    pub const TOO_HIGH: &str = "tooHigh";
    pub const TOO_HIGH_OR_EQUAL: &str = "tooHighOrEqual";
    pub const TOO_LOW: &str = "tooLow";
    pub const TOO_LOW_OR_EQUAL: &str = "tooLowOrEqual";
    pub const NOT_IN_RANGE: &str = "notInRange";
    pub const NOT_POSITIVE: &str = "notPositive";
    pub const NOT_POSITIVE_OR_ZERO: &str = "notPositiveOrZero";
    pub const NOT_NEGATIVE: &str = "notNegative";
    pub const NOT_NEGATIVE_OR_ZERO: &str = "notNegativeOrZero";

    pub const TOO_EARLY: &str = "tooEarly";
    pub const TOO_EARLY_OR_EQUAL: &str = "tooEarlyOrEqual";
    pub const TOO_LATE: &str = "tooLate";
    pub const TOO_LATE_OR_EQUAL: &str = "tooLateOrEqual";

    pub const NO_SUCH_CHOICE: &str = "noSuchChoice";
    pub const NOT_VALID: &str = "notValid";
}

/// Default (English) message templates of the built-in constraints.
pub mod template {
    pub const BLANK: &str = "This value should be blank.";
    pub const NOT_BLANK: &str = "This value should not be blank.";
    pub const NIL: &str = "This value should be nil.";
    pub const NOT_NIL: &str = "This value should not be nil.";
    pub const NOT_TRUE: &str = "This value should be true.";
    pub const NOT_FALSE: &str = "This value should be false.";

    pub const LENGTH_TOO_FEW: &str = "This value is too short. It should have {{ limit }} character or more.|This value is too short. It should have {{ limit }} characters or more.";
    pub const LENGTH_TOO_MANY: &str = "This value is too long. It should have {{ limit }} character or less.|This value is too long. It should have {{ limit }} characters or less.";
    pub const LENGTH_EXACT: &str = "This value should have exactly {{ limit }} character.|This value should have exactly {{ limit }} characters.";

    pub const COUNT_TOO_FEW: &str = "This collection should contain {{ limit }} element or more.|This collection should contain {{ limit }} elements or more.";
    pub const COUNT_TOO_MANY: &str = "This collection should contain {{ limit }} element or less.|This collection should contain {{ limit }} elements or less.";
    pub const COUNT_EXACT: &str = "This collection should contain exactly {{ limit }} element.|This collection should contain exactly {{ limit }} elements.";

    pub const NOT_EQUAL: &str = "This value should be equal to {{ comparedValue }}.";
    pub const IS_EQUAL: &str = "This value should not be equal to {{ comparedValue }}.";
    pub const TOO_HIGH: &str = "This value should be less than or equal to {{ comparedValue }}.";
    pub const TOO_HIGH_OR_EQUAL: &str = "This value should be less than {{ comparedValue }}.";
    pub const TOO_LOW: &str = "This value should be greater than or equal to {{ comparedValue }}.";
    pub const TOO_LOW_OR_EQUAL: &str = "This value should be greater than {{ comparedValue }}.";
    pub const NOT_IN_RANGE: &str = "This value should be between {{ min }} and {{ max }}.";
    pub const NOT_POSITIVE: &str = "This value should be positive.";
    pub const NOT_POSITIVE_OR_ZERO: &str = "This value should be either positive or zero.";
    pub const NOT_NEGATIVE: &str = "This value should be negative.";
    pub const NOT_NEGATIVE_OR_ZERO: &str = "This value should be either negative or zero.";

    pub const TOO_EARLY: &str = "This value should be later than or equal to {{ comparedValue }}.";
    pub const TOO_EARLY_OR_EQUAL: &str = "This value should be later than {{ comparedValue }}.";
    pub const TOO_LATE: &str = "This value should be earlier than or equal to {{ comparedValue }}.";
    pub const TOO_LATE_OR_EQUAL: &str = "This value should be earlier than {{ comparedValue }}.";

    pub const NO_SUCH_CHOICE: &str = "The value you selected is not a valid choice.";
    pub const NOT_VALID: &str = "This value is not valid.";
}

/// Russian translations of the default templates.
pub(crate) const RUSSIAN: &[(&str, &str)] = &[
    (template::BLANK, "Значение должно быть пустым."),
    (template::NOT_BLANK, "Значение не должно быть пустым."),
    (template::NIL, "Значение должно быть nil."),
    (template::NOT_NIL, "Значение не должно быть nil."),
    (template::NOT_TRUE, "Значение должно быть истинным."),
    (template::NOT_FALSE, "Значение должно быть ложным."),
    (
        template::LENGTH_TOO_FEW,
        "Значение слишком короткое. Должно быть равно {{ limit }} символу или больше.|Значение слишком короткое. Должно быть равно {{ limit }} символам или больше.|Значение слишком короткое. Должно быть равно {{ limit }} символам или больше.",
    ),
    (
        template::LENGTH_TOO_MANY,
        "Значение слишком длинное. Должно быть равно {{ limit }} символу или меньше.|Значение слишком длинное. Должно быть равно {{ limit }} символам или меньше.|Значение слишком длинное. Должно быть равно {{ limit }} символам или меньше.",
    ),
    (
        template::LENGTH_EXACT,
        "Значение должно быть равно {{ limit }} символу.|Значение должно быть равно {{ limit }} символам.|Значение должно быть равно {{ limit }} символам.",
    ),
    (
        template::COUNT_TOO_FEW,
        "Эта коллекция должна содержать {{ limit }} элемент или больше.|Эта коллекция должна содержать {{ limit }} элемента или больше.|Эта коллекция должна содержать {{ limit }} элементов или больше.",
    ),
    (
        template::COUNT_TOO_MANY,
        "Эта коллекция должна содержать {{ limit }} элемент или меньше.|Эта коллекция должна содержать {{ limit }} элемента или меньше.|Эта коллекция должна содержать {{ limit }} элементов или меньше.",
    ),
    (
        template::COUNT_EXACT,
        "Эта коллекция должна содержать ровно {{ limit }} элемент.|Эта коллекция должна содержать ровно {{ limit }} элемента.|Эта коллекция должна содержать ровно {{ limit }} элементов.",
    ),
    (template::NOT_EQUAL, "Значение должно быть равно {{ comparedValue }}."),
    (template::IS_EQUAL, "Значение не должно быть равно {{ comparedValue }}."),
    (template::TOO_HIGH, "Значение должно быть меньше или равно {{ comparedValue }}."),
    (template::TOO_HIGH_OR_EQUAL, "Значение должно быть меньше {{ comparedValue }}."),
    (template::TOO_LOW, "Значение должно быть больше или равно {{ comparedValue }}."),
    (template::TOO_LOW_OR_EQUAL, "Значение должно быть больше {{ comparedValue }}."),
    (template::NOT_IN_RANGE, "Значение должно быть между {{ min }} и {{ max }}."),
    (template::NOT_POSITIVE, "Значение должно быть положительным."),
    (template::NOT_POSITIVE_OR_ZERO, "Значение должно быть положительным или равным нулю."),
    (template::NOT_NEGATIVE, "Значение должно быть отрицательным."),
    (template::NOT_NEGATIVE_OR_ZERO, "Значение должно быть отрицательным или равным нулю."),
    (template::TOO_EARLY, "Значение должно быть не раньше {{ comparedValue }}."),
    (template::TOO_EARLY_OR_EQUAL, "Значение должно быть позже {{ comparedValue }}."),
    (template::TOO_LATE, "Значение должно быть не позже {{ comparedValue }}."),
    (template::TOO_LATE_OR_EQUAL, "Значение должно быть раньше {{ comparedValue }}."),
    (template::NO_SUCH_CHOICE, "Выбранное Вами значение недопустимо."),
    (template::NOT_VALID, "Значение недопустимо."),
];
