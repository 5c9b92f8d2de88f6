use sea_orm::*;

use crate::db::portfolio as portfolio_db;
use crate::models::portfolio::NewPortfolio;
use crate::models::portfolio_images::{MediaKind, NewAttachment};

/// Example case studies shown on a fresh install.
fn example_portfolios() -> Vec<(NewPortfolio, &'static str)> {
    vec![
        (
            NewPortfolio {
                title: "살림의 기준 - 브랜드 필름".to_string(),
                category: "브랜드 홍보 영상".to_string(),
                video_url: None,
                problem: Some("정보 전달과 따뜻한 감성을 동시에 잡아야 하는 과제".to_string()),
                solution: Some(
                    "자막의 폰트 선택 이유, 색보정(DI) 의도, 클릭을 유도한 썸네일 디자인 전략 등"
                        .to_string(),
                ),
                result: Some("조회수 10만회 돌파, 긍정 댓글 98%".to_string()),
            },
            "https://picsum.photos/seed/work1/800/450",
        ),
        (
            NewPortfolio {
                title: "테크 리뷰 2024".to_string(),
                category: "유튜브 콘텐츠".to_string(),
                video_url: None,
                problem: Some("복잡한 스펙을 시청자가 이해하기 쉽게 시각화".to_string()),
                solution: Some("인포그래픽과 모션 그래픽을 활용한 직관적 설명".to_string()),
                result: Some("구독자 전환율 15% 상승".to_string()),
            },
            "https://picsum.photos/seed/work2/800/450",
        ),
    ]
}

/// Insert the example portfolio when the table is empty.
///
/// Returns the number of items inserted.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<usize, DbErr> {
    if portfolio_db::count_portfolios(db).await? > 0 {
        return Ok(0);
    }

    let examples = example_portfolios();
    let count = examples.len();
    for (item, thumbnail) in examples {
        portfolio_db::insert_portfolio_with_images(
            db,
            item,
            vec![NewAttachment {
                url: thumbnail.to_string(),
                media_type: MediaKind::Image,
            }],
        )
        .await?;
    }

    tracing::info!(count, "Seeded example portfolio items");
    Ok(count)
}
