//! Hangman renderer - pure drawing, no game logic
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::engine::{RoundState, RoundStatus, ALPHABET};
use super::game::{Focus, HangmanGame, KEYBOARD_COLUMNS};

pub struct HangmanRenderer;

impl HangmanRenderer {
    pub fn render(frame: &mut Frame, game: &HangmanGame) {
        let round = game.round();

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(" FORCA ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            header,
        );

        let [left, right] =
            Layout::horizontal([Constraint::Length(28), Constraint::Min(0)]).areas(body);

        frame.render_widget(
            Paragraph::new(Self::stage_lines(round))
                .block(Block::default().title(" GALLOWS ").borders(Borders::ALL)),
            left,
        );

        frame.render_widget(
            Paragraph::new(Self::board_lines(game))
                .block(Block::default().title(" WORD ").borders(Borders::ALL)),
            right,
        );

        frame.render_widget(
            Paragraph::new(Self::help_text(game.focus())).alignment(Alignment::Center),
            footer,
        );
    }

    /// Gallows drawing. Wrong guesses add, in order: head, torso, left arm,
    /// right arm, left leg, right leg.
    pub fn gallows(errors: u8) -> Vec<String> {
        let part = |n: u8, c: char| if errors >= n { c } else { ' ' };

        vec![
            "  +----+".to_owned(),
            "  |    |".to_owned(),
            format!("  |    {}", part(1, 'O')),
            format!("  |   {}{}{}", part(3, '/'), part(2, '|'), part(4, '\\')),
            format!("  |   {} {}", part(5, '/'), part(6, '\\')),
            "  |".to_owned(),
            "=========".to_owned(),
        ]
    }

    /// Word blanks, e.g. `T _ S T _`
    pub fn masked_word(round: &RoundState) -> String {
        round
            .revealed_word()
            .into_iter()
            .map(|(c, shown)| if shown { c.to_string() } else { "_".to_owned() })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Colour of a keyboard key: grey once disabled, green/red once guessed
    pub fn key_style(round: &RoundState, letter: char, selected: bool) -> Style {
        let mut style = if round.guesses().contains(&letter) {
            if round.word().contains(letter) {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::Black).bg(Color::Red)
            }
        } else if round.is_letter_disabled(letter) {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        if selected {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        style
    }

    fn stage_lines(round: &RoundState) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = Self::gallows(round.errors())
            .into_iter()
            .map(Line::from)
            .collect();

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw("Attempts left: "),
            Span::styled(
                round.remaining_attempts().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));

        let mut used = vec![Span::raw("Used: ")];
        if round.guesses().is_empty() {
            used.push(Span::raw("—"));
        }
        for &letter in round.guesses() {
            let color = if round.word().contains(letter) {
                Color::Green
            } else {
                Color::Red
            };
            used.push(Span::styled(letter.to_string(), Style::default().fg(color)));
            used.push(Span::raw(" "));
        }
        lines.push(Line::from(used));

        lines
    }

    fn board_lines(game: &HangmanGame) -> Vec<Line<'static>> {
        let round = game.round();
        let mut lines = vec![
            Line::from(Span::styled(
                Self::masked_word(round),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        let field = if game.input().is_empty() {
            " ".to_owned()
        } else {
            game.input().to_owned()
        };
        let field_style = match game.focus() {
            Focus::TextInput => Style::default().add_modifier(Modifier::REVERSED),
            Focus::Keyboard => Style::default().fg(Color::DarkGray),
        };
        lines.push(Line::from(vec![
            Span::raw("Letter: ["),
            Span::styled(field, field_style),
            Span::raw("]"),
        ]));
        lines.push(Line::default());

        for (row, keys) in ALPHABET.chunks(KEYBOARD_COLUMNS).enumerate() {
            let spans: Vec<Span> = keys
                .iter()
                .enumerate()
                .map(|(col, &letter)| {
                    let selected = game.focus() == Focus::Keyboard
                        && game.cursor() == row * KEYBOARD_COLUMNS + col;
                    Span::styled(
                        format!(" {letter} "),
                        Self::key_style(round, letter, selected),
                    )
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());

        lines.push(Self::letters_line("Correct: ", &round.correct_guesses(), Color::Green));
        lines.push(Self::letters_line("Wrong:   ", &round.wrong_guesses(), Color::Red));
        lines.push(Line::default());

        match round.status() {
            RoundStatus::InProgress => {}
            RoundStatus::Won => {
                lines.push(Line::from(Span::styled(
                    "You won!",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(format!("The word was: {}", round.word())));
            }
            RoundStatus::Lost => {
                lines.push(Line::from(Span::styled(
                    "You lost",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(format!("The word was: {}", round.word())));
            }
        }

        lines
    }

    fn letters_line(label: &'static str, letters: &[char], color: Color) -> Line<'static> {
        let text = if letters.is_empty() {
            "—".to_owned()
        } else {
            letters.iter().map(char::to_string).collect::<Vec<_>>().join(" ")
        };

        Line::from(vec![
            Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(text, Style::default().fg(color)),
        ])
    }

    fn help_text(focus: Focus) -> &'static str {
        match focus {
            Focus::Keyboard => {
                "[←↑↓→] Move  [Enter] Guess  [A-Z] Type  [Tab] Text field  [Ctrl+R] Restart  [Esc] Quit"
            }
            Focus::TextInput => {
                "[A-Z] Type  [Backspace] Clear  [Enter] Submit  [Tab] Keyboard  [Ctrl+R] Restart  [Esc] Quit"
            }
        }
    }
}
