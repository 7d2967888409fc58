use artistly_core::model::ArtistRecord;

use crate::query::Query;

/// A query with its text criteria lower-cased once, ready to test records.
#[derive(Debug)]
pub(crate) struct Matcher<'q> {
    query: &'q Query,
    search_term: String,
    location: String,
}

impl<'q> Matcher<'q> {
    pub(crate) fn new(query: &'q Query) -> Self {
        Self {
            query,
            search_term: query.search_term.to_lowercase(),
            location: query.location.to_lowercase(),
        }
    }

    fn matches_search(&self, artist: &ArtistRecord) -> bool {
        self.search_term.is_empty()
            || [&artist.name, &artist.bio, &artist.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&self.search_term))
    }

    fn matches_category(&self, artist: &ArtistRecord) -> bool {
        self.query.categories.is_empty() || self.query.categories.contains(&artist.category)
    }

    fn matches_location(&self, artist: &ArtistRecord) -> bool {
        self.location.is_empty() || artist.location.to_lowercase().contains(&self.location)
    }

    fn matches_price(&self, artist: &ArtistRecord) -> bool {
        self.query
            .price_bucket
            .map_or(true, |bucket| bucket.matches(artist.price_range.bounds()))
    }

    pub(crate) fn matches(&self, artist: &ArtistRecord) -> bool {
        self.matches_search(artist)
            && self.matches_category(artist)
            && self.matches_location(artist)
            && self.matches_price(artist)
    }
}

/// Narrow `records` to those matching every active criterion of `query`.
///
/// The result borrows from the input and keeps its order. Nothing is
/// ranked: this is a filter, not a relevance search. Because the output
/// yields `&ArtistRecord` again, it can be fed straight back in.
pub fn filter<'a, I>(records: I, query: &Query) -> Vec<&'a ArtistRecord>
where
    I: IntoIterator<Item = &'a ArtistRecord>,
{
    let matcher = Matcher::new(query);
    let mut seen = 0usize;
    let matched: Vec<_> = records
        .into_iter()
        .inspect(|_| seen += 1)
        .filter(|artist| matcher.matches(artist))
        .collect();
    log::debug!("Query matched {} of {} artists", matched.len(), seen);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::PriceBucket;
    use artistly_core::model::Category;

    fn records() -> Vec<ArtistRecord> {
        vec![
            ArtistRecord::new(1, "Sarah Johnson", Category::Singer)
                .with_bio("wedding singer")
                .with_location("New York")
                .with_price_range("$500-1000"),
            ArtistRecord::new(2, "DJ Mike Rodriguez", Category::Dj)
                .with_bio("corporate parties")
                .with_location("Miami, FL")
                .with_price_range("$800-1500"),
            ArtistRecord::new(3, "Jonas Weber", Category::Speaker)
                .with_bio("futurist")
                .with_location("Austin, TX")
                .with_price_range("Negotiable"),
        ]
    }

    fn ids(result: &[&ArtistRecord]) -> Vec<u32> {
        result.iter().map(|a| a.id.get()).collect()
    }

    #[test]
    fn test_match_all_returns_everything_in_order() {
        let records = records();
        assert_eq!(ids(&filter(&records, &Query::new())), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_checks_name_bio_and_location() {
        let records = records();
        let by = |term: &str| ids(&filter(&records, &Query::new().with_search_term(term)));
        assert_eq!(by("mike"), vec![2]);
        assert_eq!(by("WEDDING"), vec![1]);
        assert_eq!(by("austin"), vec![3]);
        assert_eq!(by("zzz"), Vec::<u32>::new());
    }

    #[test]
    fn test_location_is_case_insensitive_substring() {
        let records = records();
        let query = Query::new().with_location("fl");
        assert_eq!(ids(&filter(&records, &query)), vec![2]);
    }

    #[test]
    fn test_location_does_not_search_name() {
        let records = records();
        let query = Query::new().with_location("Sarah");
        assert!(filter(&records, &query).is_empty());
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let records = records();
        let query = Query::new()
            .with_search_term("o")
            .with_category(Category::Singer)
            .with_location("new");
        assert_eq!(ids(&filter(&records, &query)), vec![1]);
    }

    #[test]
    fn test_price_bucket_excludes_unparseable_prices() {
        let records = records();
        let query = Query::new().with_price_bucket(PriceBucket::From500To1000);
        assert_eq!(ids(&filter(&records, &query)), vec![1]);
    }

    #[test]
    fn test_filter_result_can_be_refiltered() {
        let records = records();
        let query = Query::new().with_search_term("e");
        let once = filter(&records, &query);
        let twice = filter(once.clone(), &query);
        assert_eq!(once, twice);
    }
}
