//! Macro for convenient Cypher query construction.

/// Macro for inline Cypher queries with optional parameters.
///
/// # Usage
///
/// ```ignore
/// use ontograph::graph::cypher;
///
/// let query = cypher!(graph, "CALL n10s.graphconfig.init()");
///
/// let query = cypher!(
///     graph,
///     "CALL n10s.onto.import.fetch($url, $format)",
///     url = url,
///     format = format.as_str()
/// );
///
/// let rows = query.fetch_all().await?;
/// ```
#[macro_export]
macro_rules! cypher {
    // Query without parameters
    ($graph:expr, $query:expr) => {
        $graph.query($query)
    };
    // Query with parameters
    ($graph:expr, $query:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $graph.query($query)$(.param(stringify!($name), $value))+
    };
}
