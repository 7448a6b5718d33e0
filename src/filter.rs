pub fn filter_options<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<String> {
    let needle = query.to_lowercase();
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|option| option.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}
