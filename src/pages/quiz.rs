use yew::prelude::*;

use crate::browser::scroll_to_section;
use crate::components::notification::use_toaster;
use crate::config::PROGRAM_NAME;
use crate::content;
use crate::quiz::{score_badge, Phase, QuizAction, QuizSession, ScoreTier};

#[function_component(QuizSection)]
pub fn quiz_section() -> Html {
    let quiz = use_reducer(|| QuizSession::new(content::quiz_bank()));
    let toaster = use_toaster();

    // One toast per completed run.
    {
        let completions = quiz.completions();
        let quiz = quiz.clone();
        use_effect_with_deps(
            move |completions| {
                if *completions > 0 {
                    if let Some(score) = quiz.score() {
                        let total = quiz.questions().len();
                        toaster.show(ScoreTier::for_score(score).notice(score, total));
                    }
                }
                || ()
            },
            completions,
        );
    }

    let body = match quiz.phase() {
        Phase::NotStarted => intro(&quiz),
        Phase::InProgress => question_card(&quiz),
        Phase::ShowingResults => results(&quiz),
    };

    html! {
        <section id="quiz" class="quiz">
            <div class="quiz-inner">{ body }</div>
            <style>
                {r#"
                .quiz {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(135deg, #faf5ff, #fff7ed);
                    color: #1f1f3a;
                }
                .quiz-inner {
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .quiz-head {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .quiz-head h2 {
                    font-size: 2.75rem;
                    color: #7c3aed;
                }
                .quiz-card {
                    background: #ffffff;
                    border: 2px solid rgba(124, 58, 237, 0.2);
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 8px 28px rgba(124, 58, 237, 0.1);
                }
                .quiz-perks {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    margin: 1.5rem 0;
                    text-align: center;
                }
                .quiz-perk {
                    background: #f5f3ff;
                    border-radius: 0.5rem;
                    padding: 1rem;
                }
                .quiz-meta {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }
                .option {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    margin-bottom: 0.75rem;
                    cursor: pointer;
                }
                .option:hover, .option.selected {
                    background: #f5f3ff;
                    border-color: #7c3aed;
                }
                .quiz-actions {
                    display: flex;
                    justify-content: flex-end;
                    gap: 1rem;
                }
                .quiz-actions.center {
                    justify-content: center;
                }
                .btn-wide {
                    width: 100%;
                    font-size: 1.2rem;
                    padding: 1rem;
                }
                .score {
                    font-size: 4rem;
                    font-weight: 700;
                    text-align: center;
                }
                .score-title {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #7c3aed;
                    text-align: center;
                }
                .review-item {
                    display: flex;
                    gap: 0.75rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    margin-bottom: 1rem;
                }
                .mark {
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 50%;
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .mark.right { background: #22c55e; }
                .mark.wrong { background: #ef4444; }
                .review-correct { color: #16a34a; font-size: 0.9rem; }
                .review-explain { color: #2563eb; font-size: 0.9rem; }
                "#}
            </style>
        </section>
    }
}

fn intro(quiz: &UseReducerHandle<QuizSession>) -> Html {
    let on_start = {
        let quiz = quiz.clone();
        Callback::from(move |_: MouseEvent| quiz.dispatch(QuizAction::Start))
    };

    html! {
        <>
            <div class="quiz-head">
                <div style="font-size: 3.5rem;">{"🧠"}</div>
                <h2>{"Innovation & Entrepreneurship Quiz"}</h2>
                <p class="muted">
                    {format!("Test your knowledge and get ready for the {} journey! Answer {} questions and see how innovation-ready you are.", PROGRAM_NAME, quiz.questions().len())}
                </p>
            </div>
            <div class="quiz-card" style="text-align: center;">
                <div style="font-size: 3rem;">{"🏆"}</div>
                <h3>{"Ready for the Challenge?"}</h3>
                <p class="muted">
                    {"Questions about innovation, entrepreneurship, and startup fundamentals. Perfect preparation for your journey!"}
                </p>
                <div class="quiz-perks">
                    <div class="quiz-perk"><div>{"🎯"}</div><strong>{format!("{} Questions", quiz.questions().len())}</strong><div class="muted">{"Multi-choice"}</div></div>
                    <div class="quiz-perk"><div>{"⭐"}</div><strong>{"Instant Score"}</strong><div class="muted">{"With explanations"}</div></div>
                    <div class="quiz-perk"><div>{"🚀"}</div><strong>{"Innovation Ready"}</strong><div class="muted">{"Level up!"}</div></div>
                </div>
                <button class="btn-primary btn-wide" onclick={on_start} disabled={quiz.questions().is_empty()}>
                    {"🧠 Start Quiz Challenge"}
                </button>
            </div>
        </>
    }
}

fn question_card(quiz: &UseReducerHandle<QuizSession>) -> Html {
    let Some(question) = quiz.current_question() else {
        return html! {};
    };
    let index = quiz.current_index();
    let selected = quiz.answer(index);

    let on_next = {
        let quiz = quiz.clone();
        Callback::from(move |_: MouseEvent| quiz.dispatch(QuizAction::Advance))
    };

    html! {
        <div class="quiz-card">
            <div class="quiz-meta">
                <strong>{"💡 Innovation Quiz"}</strong>
                <span class="muted">{format!("{} of {}", index + 1, quiz.questions().len())}</span>
            </div>
            <div class="progress">
                <div class="progress-fill" style={format!("width: {:.0}%;", quiz.progress() * 100.0)}></div>
            </div>
            <h3>{&question.question}</h3>
            <div role="radiogroup">
                { for question.options.iter().enumerate().map(|(i, option)| {
                    let onchange = {
                        let quiz = quiz.clone();
                        Callback::from(move |_: Event| quiz.dispatch(QuizAction::Select(i)))
                    };
                    let id = format!("option-{}", i);
                    html! {
                        <label for={id.clone()} class={classes!("option", (selected == Some(i)).then(|| "selected"))}>
                            <input type="radio" name={format!("question-{}", index)} {id} checked={selected == Some(i)} {onchange} />
                            {option}
                        </label>
                    }
                }) }
            </div>
            <div class="quiz-actions">
                <button class="btn-primary" onclick={on_next} disabled={!quiz.can_advance()}>
                    { if quiz.is_last_question() { "View Results" } else { "Next Question" } }
                </button>
            </div>
        </div>
    }
}

fn results(quiz: &UseReducerHandle<QuizSession>) -> Html {
    let score = quiz.score().unwrap_or(0);
    let total = quiz.questions().len();
    let (badge, color) = score_badge(score);

    let on_retake = {
        let quiz = quiz.clone();
        Callback::from(move |_: MouseEvent| quiz.dispatch(QuizAction::Reset))
    };
    let on_register = Callback::from(|_: MouseEvent| scroll_to_section("register"));

    html! {
        <div class="quiz-card">
            <div style="text-align: center; font-size: 3rem;">{"🏆"}</div>
            <h2 style="text-align: center;">{"Quiz Complete!"}</h2>
            <div class="score" style={format!("color: {};", color)}>{format!("{}/{}", score, total)}</div>
            <div class="score-title">{badge}</div>
            <p class="muted" style="text-align: center;">{ScoreTier::for_score(score).message()}</p>

            <h4>{"Your Answers Review:"}</h4>
            { for quiz.questions().iter().enumerate().map(|(i, q)| {
                let correct = quiz.is_correct(i);
                let chosen = quiz.answer(i).and_then(|a| q.options.get(a)).map(String::as_str).unwrap_or("-");
                html! {
                    <div class="review-item">
                        <div class={classes!("mark", if correct { "right" } else { "wrong" })}>
                            { if correct { "✓" } else { "✗" } }
                        </div>
                        <div>
                            <div><strong>{format!("Q{}: {}", i + 1, q.question)}</strong></div>
                            <div class="muted">{format!("Your answer: {}", chosen)}</div>
                            if !correct {
                                <div class="review-correct">{format!("Correct: {}", q.options.get(q.correct).map(String::as_str).unwrap_or("-"))}</div>
                            }
                            <div class="review-explain">{format!("💡 {}", q.explanation)}</div>
                        </div>
                    </div>
                }
            }) }

            <div class="quiz-actions center">
                <button class="btn-outline" onclick={on_retake}>{"Retake Quiz"}</button>
                <button class="btn-primary" onclick={on_register}>{format!("🚀 Register for {}", PROGRAM_NAME)}</button>
            </div>
        </div>
    }
}
