//! A complete sample lesson showing every layout and tag.

/// Starter lesson for new authors. Compiles without diagnostics.
pub const SAMPLE_LESSON: &str = r#"# Sample lesson: Business English, unit 3
# Lines starting with '#' are comments.

Slide 1
Title: Writing Professional Emails
Content: [emphasis] Lesson 3
Content: Business English Course
Content: Today's focus:
Content: [step] Email structure and conventions
Content: [step] Professional tone
Content: [step] Useful phrases
Notes: Introduce the topic. 5 minutes.

---

Slide 2
Title: Discussion
Content: [question] How many emails do you write each day?
Content: Think about:
Content: who you write to
Content: how formal you are
Notes: Give thinking time, then elicit answers.

---

Slide 3
Title: Key Vocabulary
Template: vocabulary
Left: [vocabulary] recipient
Right: the person who receives a message
Left: [vocabulary] attachment
Right: a file sent with an email
Notes: Drill pronunciation. Check understanding.

---

Slide 4
Title: Reading: A Late Reply
Template: reading
LeftTop: Maria sent a proposal to a new client on Monday. By Friday she had
heard nothing, so she wrote a short, polite follow-up asking whether the
client needed more information.
LeftBottom: 1. When did Maria send the proposal?
2. Why did she write again?
3. How would you describe her tone?

---

Slide 5
Title: Email Structure
LeftTop: [emphasis] Greeting
RightTop: [emphasis] Purpose
LeftBottom: Dear Ms Patel,
RightBottom: I am writing to confirm our meeting.

---

Slide 6
Title: Formal or Informal?
Template: comparison
Left: Hi, can you send it?
Right: Could you please send the report?
Notes: Ask which version suits a new client.
"#;
