//! Sample data for a fresh database.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::movie::MovieInput;
use crate::repositories::MovieRepo;
use crate::DbPool;

/// The sample movies inserted into an empty catalog.
pub fn sample_movies() -> Vec<MovieInput> {
    let movie = |title: &str, (y, m, d): (i32, u32, u32), genre: &str, cents: i64, rating: &str| {
        MovieInput {
            title: title.to_string(),
            genre: genre.to_string(),
            price: Decimal::new(cents, 2),
            release_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            rating: rating.to_string(),
        }
    };

    vec![
        movie("When Harry Met Sally", (1989, 2, 12), "Romantic Comedy", 799, "R"),
        movie("Ghostbusters", (1984, 3, 13), "Comedy", 899, "PG"),
        movie("Ghostbusters 2", (1986, 2, 23), "Comedy", 999, "PG"),
        movie("Rio Bravo", (1959, 4, 15), "Western", 399, "PG"),
    ]
}

/// Insert [`sample_movies`] when the `movie` table is empty.
///
/// Returns the number of rows inserted (zero when data already exists).
pub async fn seed_movies(pool: &DbPool) -> Result<usize, sqlx::Error> {
    if MovieRepo::count(pool).await? > 0 {
        tracing::debug!("Movie table already populated, skipping seed");
        return Ok(0);
    }

    let movies = sample_movies();
    let mut tx = pool.begin().await?;
    for input in &movies {
        sqlx::query(
            "INSERT INTO movie (title, genre, price, release_date, rating) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&input.title)
        .bind(&input.genre)
        .bind(input.price)
        .bind(input.release_date)
        .bind(&input.rating)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!(count = movies.len(), "Seeded sample movies");
    Ok(movies.len())
}
