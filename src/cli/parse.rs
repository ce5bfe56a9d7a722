use lexis_core::vector::Weighting;

/// Parse term weighting from string
pub fn parse_weighting(s: &str) -> std::result::Result<Weighting, String> {
    s.parse::<Weighting>().map_err(|e| e.to_string())
}
