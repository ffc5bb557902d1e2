// End-to-end integration tests for the Blog API
//
// A single PostgreSQL database is shared by the whole suite, either from a
// testcontainers instance started on first use or from TEST_DATABASE_URL.
// Every test goes through the same lifecycle via test-context hooks:
//
// - setup: start the HTTP server against the test database, wipe it, seed posts
// - test body: issue requests, check responses and re-read the store
// - teardown: wipe the database and stop the server
//
// Tests touching the shared database are marked #[serial].

mod test_lifecycle;
