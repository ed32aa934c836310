use std::io::{self, BufRead, Write};

use anyhow::Result;
use whatsfordinner_decision::{
    CELEBRATION_MESSAGE, Flow, FlowResult, FlowStep, MODES, RandomSource, SeededRandom, Snapshot,
    ThreadRandom, pantry_preview,
};
use whatsfordinner_recipe::Recipe;
use whatsfordinner_restaurant::Restaurant;

/// What to do once a decision ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    Again,
    Quit,
}

/// Everything saved, read once at the start of each decision.
#[derive(Debug, Default)]
struct Saved {
    recipes: Vec<Recipe>,
    restaurants: Vec<Restaurant>,
    pantry: Vec<String>,
}

impl Saved {
    async fn load(pool: &sqlx::SqlitePool) -> Result<Self> {
        Ok(Self {
            recipes: whatsfordinner_recipe::Query(pool.clone()).all().await?,
            restaurants: whatsfordinner_restaurant::Query(pool.clone()).all().await?,
            pantry: whatsfordinner_pantry::Query(pool.clone())
                .names_in_pantry()
                .await?,
        })
    }

    fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            recipes: &self.recipes,
            restaurants: &self.restaurants,
            pantry: &self.pantry,
        }
    }
}

pub async fn run(config: whatsfordinner::Config, seed: Option<u64>) -> Result<()> {
    match seed {
        Some(seed) => run_with(config, SeededRandom::new(seed)).await,
        None => run_with(config, ThreadRandom).await,
    }
}

async fn run_with<R: RandomSource>(config: whatsfordinner::Config, mut rng: R) -> Result<()> {
    let pool = super::pool(&config).await?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    loop {
        let saved = Saved::load(&pool).await?;
        tracing::debug!(
            recipes = saved.recipes.len(),
            restaurants = saved.restaurants.len(),
            pantry = saved.pantry.len(),
            "Loaded saved data"
        );

        if decide(&saved, &mut input, &mut output, &mut rng)? == Next::Quit {
            return Ok(());
        }
    }
}

/// Runs one decision from mode selection to the celebration.
fn decide<R: RandomSource>(
    saved: &Saved,
    input: &mut impl BufRead,
    output: &mut impl Write,
    rng: &mut R,
) -> Result<Next> {
    let snapshot = saved.snapshot();
    let mut flow = Flow::new();

    loop {
        match flow.step() {
            FlowStep::ModeSelection => {
                writeln!(output, "\nWhat are we doing tonight?")?;
                for (i, descriptor) in MODES.iter().enumerate() {
                    writeln!(output, "  {}. {}: {}", i + 1, descriptor.label, descriptor.description)?;
                }
                writeln!(output, "  q. Quit")?;

                let Some(choice) = read_choice(input, output)? else {
                    return Ok(Next::Quit);
                };

                if choice == "q" {
                    return Ok(Next::Quit);
                }

                match pick(&choice, MODES.len()) {
                    Some(i) => {
                        flow.choose_mode(MODES[i].mode, &snapshot)?;
                    }
                    None => writeln!(output, "Pick 1 to {}", MODES.len())?,
                }
            }
            FlowStep::Questions => {
                let (Some(question), Some((position, total))) =
                    (flow.current_question(), flow.progress())
                else {
                    return Ok(Next::Again);
                };

                writeln!(output, "\n({position}/{total}) {}", question.prompt)?;
                for (i, option) in question.options.iter().enumerate() {
                    match option.sublabel {
                        Some(sublabel) => {
                            writeln!(output, "  {}. {} ({sublabel})", i + 1, option.label)?
                        }
                        None => writeln!(output, "  {}. {}", i + 1, option.label)?,
                    }
                }
                writeln!(output, "  b. Back   s. Start over   q. Quit")?;

                let Some(choice) = read_choice(input, output)? else {
                    return Ok(Next::Quit);
                };

                match choice.as_str() {
                    "b" => {
                        flow.back()?;
                    }
                    "s" => return Ok(Next::Again),
                    "q" => return Ok(Next::Quit),
                    choice => match pick(choice, question.options.len()) {
                        Some(i) => {
                            flow.answer(question.options[i].value, &snapshot, rng)?;
                        }
                        None => writeln!(output, "Pick 1 to {}", question.options.len())?,
                    },
                }
            }
            FlowStep::Result => {
                let has_content = match flow.result() {
                    Some(result) => {
                        write_result(output, result)?;
                        result.has_content()
                    }
                    None => return Ok(Next::Again),
                };

                if has_content {
                    writeln!(output, "  t. Try again   c. Let's do it   s. Start over")?;
                } else {
                    writeln!(output, "  s. Start over   q. Quit")?;
                }

                let Some(choice) = read_choice(input, output)? else {
                    return Ok(Next::Quit);
                };

                match choice.as_str() {
                    "t" if has_content => {
                        flow.try_again(&snapshot, rng)?;
                    }
                    "c" if has_content => {
                        flow.confirm()?;
                    }
                    "s" => return Ok(Next::Again),
                    "q" => return Ok(Next::Quit),
                    _ => writeln!(output, "Sorry, I didn't get that")?,
                }
            }
            FlowStep::Celebration => {
                if let Some(name) = flow.result().and_then(|r| r.display_name()) {
                    writeln!(output, "\n{name}")?;
                }
                writeln!(output, "{CELEBRATION_MESSAGE}")?;
                writeln!(output, "  Enter to decide again, q to quit")?;

                let choice = read_choice(input, output)?;
                flow.done()?;

                return Ok(match choice.as_deref() {
                    None | Some("q") => Next::Quit,
                    Some(_) => Next::Again,
                });
            }
        }
    }
}

fn write_result(output: &mut impl Write, result: &FlowResult) -> io::Result<()> {
    match result {
        FlowResult::Recipe(recipe) => {
            writeln!(output, "\nHow about {}?", recipe.name)?;
            if let Some(description) = &recipe.description {
                writeln!(output, "  {description}")?;
            }
            if let Some(minutes) = recipe.total_time_minutes() {
                writeln!(output, "  Ready in {minutes} min")?;
            }
            if let Some(servings) = recipe.servings {
                writeln!(output, "  Serves {servings}")?;
            }
        }
        FlowResult::Restaurant(restaurant) => {
            writeln!(output, "\nHow about {}?", restaurant.name)?;
            if let Some(cuisine) = &restaurant.cuisine {
                writeln!(output, "  {cuisine}")?;
            }
            if let Some(price) = restaurant.price_label() {
                writeln!(output, "  {price}")?;
            }
            if let Some(notes) = &restaurant.notes {
                writeln!(output, "  {notes}")?;
            }
        }
        FlowResult::Meal { idea, pantry } => {
            writeln!(output, "\nHow about {}?", idea.name)?;
            writeln!(output, "  {}", idea.description)?;
            writeln!(output, "  From your pantry: {}", pantry_preview(pantry))?;
        }
        FlowResult::Empty { .. } | FlowResult::EmptyPantry => {
            if let Some(empty) = result.empty_state() {
                writeln!(output, "\n{}", empty.title)?;
                writeln!(output, "  {}", empty.body)?;
                if let Some(call_to_action) = empty.call_to_action {
                    writeln!(output, "  {call_to_action}")?;
                }
            }
        }
    }

    Ok(())
}

/// Prompts and reads one trimmed, lowercased line. `None` on end of input.
fn read_choice(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Option<String>> {
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}

/// One-based menu choice to a zero-based index.
fn pick(choice: &str, len: usize) -> Option<usize> {
    match choice.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct First;

    impl RandomSource for First {
        fn pick_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn saved() -> Saved {
        Saved {
            recipes: vec![
                Recipe {
                    id: "r1".to_owned(),
                    name: "Beef Tacos".to_owned(),
                    cook_time_minutes: Some(25),
                    ..Default::default()
                },
                Recipe {
                    id: "r2".to_owned(),
                    name: "Avocado Toast".to_owned(),
                    cook_time_minutes: Some(10),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    fn play(saved: &Saved, script: &str) -> (Next, String) {
        let mut input = io::Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();

        let next = decide(saved, &mut input, &mut output, &mut First).unwrap();

        (next, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_pick() {
        assert_eq!(pick("1", 3), Some(0));
        assert_eq!(pick("3", 3), Some(2));
        assert_eq!(pick("0", 3), None);
        assert_eq!(pick("4", 3), None);
        assert_eq!(pick("b", 3), None);
    }

    #[test]
    fn test_cook_to_celebration() {
        let (next, output) = play(&saved(), "1\n3\n1\n1\nc\n\n");

        assert_eq!(next, Next::Again);
        assert!(output.contains("(1/3) How much time do you have?"));
        assert!(output.contains("How about Beef Tacos?"));
        assert!(output.contains(CELEBRATION_MESSAGE));
    }

    #[test]
    fn test_try_again_shows_the_other_recipe() {
        let (next, output) = play(&saved(), "1\n3\n1\n1\nt\nq\n");

        assert_eq!(next, Next::Quit);
        assert!(output.contains("How about Beef Tacos?"));
        assert!(output.contains("How about Avocado Toast?"));
    }

    #[test]
    fn test_back_returns_to_previous_question() {
        let (_, output) = play(&saved(), "1\n3\nb\nq\n");

        assert_eq!(output.matches("(1/3)").count(), 2);
        assert_eq!(output.matches("(2/3)").count(), 1);
    }

    #[test]
    fn test_empty_pantry_skips_questions() {
        let (next, output) = play(&saved(), "3\nq\n");

        assert_eq!(next, Next::Quit);
        assert!(output.contains("Your pantry is empty"));
        assert!(output.contains("Go to Pantry"));
        assert!(!output.contains("(1/3)"));
    }

    #[test]
    fn test_empty_collection() {
        let (_, output) = play(&Saved::default(), "2\n3\n1\nq\n");

        assert!(output.contains("No places saved yet!"));
        assert!(!output.contains("Try again"));
    }

    #[test]
    fn test_invalid_choice_asks_again() {
        let (next, output) = play(&saved(), "9\nq\n");

        assert_eq!(next, Next::Quit);
        assert!(output.contains("Pick 1 to 3"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (next, _) = play(&saved(), "");

        assert_eq!(next, Next::Quit);
    }
}
