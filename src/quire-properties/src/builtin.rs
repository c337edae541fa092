use crate::Categories;

const LENGTH_OR_PERCENTAGE: Categories = Categories::LENGTH.union(Categories::PERCENTAGE);

pub const PROPERTIES: &[(&str, Categories)] = &[
    // Fonts and text
    ("font-size", LENGTH_OR_PERCENTAGE),
    ("font-weight", Categories::NUMBER),
    ("line-height", LENGTH_OR_PERCENTAGE.union(Categories::NUMBER)),
    ("letter-spacing", Categories::LENGTH),
    ("word-spacing", Categories::LENGTH),
    ("text-indent", LENGTH_OR_PERCENTAGE),
    // Box model
    ("width", LENGTH_OR_PERCENTAGE),
    ("height", LENGTH_OR_PERCENTAGE),
    ("margin-top", LENGTH_OR_PERCENTAGE),
    ("margin-bottom", LENGTH_OR_PERCENTAGE),
    ("margin-left", LENGTH_OR_PERCENTAGE),
    ("margin-right", LENGTH_OR_PERCENTAGE),
    ("padding-before", LENGTH_OR_PERCENTAGE),
    ("padding-after", LENGTH_OR_PERCENTAGE),
    ("padding-start", LENGTH_OR_PERCENTAGE),
    ("padding-end", LENGTH_OR_PERCENTAGE),
    ("border-before-width", Categories::LENGTH),
    ("border-after-width", Categories::LENGTH),
    // Pagination
    ("column-count", Categories::NUMBER),
    ("column-gap", LENGTH_OR_PERCENTAGE),
    ("orphans", Categories::NUMBER),
    ("widows", Categories::NUMBER),
    ("z-index", Categories::NUMBER),
    // Aural
    ("azimuth", Categories::ANGLE),
    ("elevation", Categories::ANGLE),
    ("pitch", Categories::FREQUENCY),
    ("pause-before", Categories::TIME.union(Categories::PERCENTAGE)),
    ("pause-after", Categories::TIME.union(Categories::PERCENTAGE)),
    ("richness", Categories::NUMBER),
    ("speech-rate", Categories::NUMBER),
    ("volume", Categories::NUMBER.union(Categories::PERCENTAGE)),
    // Orientation
    ("glyph-orientation-vertical", Categories::ANGLE),
];
